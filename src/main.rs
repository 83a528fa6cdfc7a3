use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use sky_catalogue::{
    config::Endpoints,
    sky::{
        self,
        client::{Sky, MAX_SEARCH_LIMIT},
        decode,
        models::{
            any_node::AnyNode,
            catalogue::Catalogue,
            filter::Filter,
            programme::Programme,
            region::Region,
            search_result::SearchType,
            shelf_item::ShelfItem,
            shelf_menu::ShelfMenu,
            DecodeError, Node,
        },
        FilterKind,
    },
};

#[derive(Parser)]
#[command(version, about = "Browse the Sky on demand catalogue")]
struct Cli {
    #[command(flatten)]
    endpoints: Endpoints,

    /// Broadcast region, matched by name against the region list.
    #[arg(long, env = "SKY_REGION", global = true)]
    region: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the broadcast regions.
    Regions,
    /// Show the home screen shelves.
    Menu,
    /// Show the programmes of one or more catalogues.
    Catalogue {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// List the filters of a catalogue section.
    Filters {
        #[arg(value_enum)]
        kind: FilterKind,
    },
    /// Search for programmes, people and sport.
    Search {
        term: String,
        /// Only keep results of these types.
        #[arg(long = "type")]
        types: Vec<SearchType>,
        #[arg(long, default_value_t = MAX_SEARCH_LIMIT)]
        limit: u8,
    },
    /// Show details of a programme.
    Programme {
        id: String,
        #[arg(long = "type", default_value = "programme")]
        search_type: SearchType,
    },
    /// Decode a saved response body without fetching anything.
    Decode {
        #[arg(value_enum)]
        shape: Shape,
        path: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy)]
enum Shape {
    Catalogue,
    Filters,
    Menu,
    Items,
    Programme,
    Any,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let cli = Cli::parse();
    let sky = Sky::new(cli.endpoints.clone());

    let result = run(&cli, &sky).await;
    if let Err(err) = &result {
        if let Some(decode_err) = err.downcast_ref::<DecodeError>() {
            log::error!("response could not be decoded: {}", decode_err);
        }
    }
    result
}

async fn run(cli: &Cli, sky: &Sky) -> Result<(), anyhow::Error> {
    match &cli.command {
        Command::Regions => {
            let mut regions = sky.get_regions().await?;
            sky::sort_regions(&mut regions);
            if cli.json {
                return print_json(&regions);
            }
            for region in regions.iter() {
                println!(
                    "{} ({}/{}, {:?})",
                    region.name, region.bouquet, region.subbouquet, region.broadcast_quality
                );
            }
        }
        Command::Menu => {
            let menu = sky.get_menu().await?;
            print_menu(cli, &menu)?;
        }
        Command::Catalogue { ids } => {
            let region = resolve_region(cli, sky).await?;
            let catalogues = sky::get_catalogues(sky, ids, &region).await?;
            if cli.json {
                return print_json(&catalogues);
            }
            for catalogue in catalogues.iter() {
                print_catalogue(catalogue);
            }
        }
        Command::Filters { kind } => {
            let region = resolve_region(cli, sky).await?;
            let filters = sky::get_filters(sky, *kind, &region).await?;
            print_filters(cli, &filters)?;
        }
        Command::Search {
            term,
            types,
            limit,
        } => {
            let region = resolve_region(cli, sky).await?;
            let results = sky.search(term, &region, types, *limit).await?;
            if cli.json {
                return print_json(&results);
            }
            for result in results.iter() {
                println!("{} [{}] {}", result.name, result.search_type, result.id);
            }
        }
        Command::Programme { id, search_type } => {
            let region = resolve_region(cli, sky).await?;
            let programme = sky.get_programme(id, *search_type, &region).await?;
            print_programme(cli, &programme)?;
        }
        Command::Decode { shape, path } => {
            let body = tokio::fs::read(path).await?;
            decode_file(cli, *shape, &body)?;
        }
    }

    Ok(())
}

async fn resolve_region(cli: &Cli, sky: &Sky) -> Result<Region, anyhow::Error> {
    let name = cli
        .region
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("no region given, set --region or SKY_REGION"))?;
    let regions = sky.get_regions().await?;
    let region = sky::closest_region(&regions, name)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("no region matches `{}`", name))?;

    if !region.name.eq_ignore_ascii_case(name) {
        log::info!("using region {} for `{}`", region.name, name);
    }
    Ok(region)
}

fn decode_file(cli: &Cli, shape: Shape, body: &[u8]) -> Result<(), anyhow::Error> {
    match shape {
        Shape::Catalogue => {
            let catalogue: Catalogue<Programme> = decode::catalogue(body)?;
            if cli.json {
                return print_json(&catalogue);
            }
            print_catalogue(&catalogue);
        }
        Shape::Filters => {
            let root: Catalogue<Catalogue<Filter>> = decode::catalogue(body)?;
            if cli.json {
                return print_json(&root);
            }
            for section in root.child_nodes.iter() {
                println!("{}", section.name);
                for filter in section.child_nodes.iter() {
                    println!("\t{} ({})", filter.name, filter.id);
                }
            }
        }
        Shape::Menu => print_menu(cli, &decode::menu(body)?)?,
        Shape::Items => {
            let items: Vec<ShelfItem> = decode::list(body)?;
            if cli.json {
                return print_json(&items);
            }
            for item in items.iter() {
                println!("{} - {} ({})", item.name, item.provider, item.id);
            }
        }
        Shape::Programme => print_programme(cli, &decode::node(body)?)?,
        Shape::Any => {
            let node: AnyNode = decode::node(body)?;
            if cli.json {
                return print_json(&node);
            }
            println!("{} {} ({})", node.node_type(), node.name(), node.id());
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), anyhow::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_menu(cli: &Cli, menu: &ShelfMenu) -> Result<(), anyhow::Error> {
    if cli.json {
        return print_json(menu);
    }
    for shelf in menu.child_nodes.iter() {
        println!("{} [{:?}]", shelf.name, shelf.layout);
        for item in shelf.items.iter() {
            println!("\t{} - {}", item.name, item.provider);
        }
    }
    Ok(())
}

fn print_catalogue(catalogue: &Catalogue<Programme>) {
    match &catalogue.subtitle {
        Some(subtitle) => println!("{} - {}", catalogue.name, subtitle),
        None => println!("{}", catalogue.name),
    }
    for programme in catalogue.child_nodes.iter() {
        println!("\t{} ({})", programme.name, programme.id);
    }
}

fn print_filters(cli: &Cli, filters: &[Filter]) -> Result<(), anyhow::Error> {
    if cli.json {
        return print_json(filters);
    }
    for filter in filters.iter() {
        println!("{} ({})", filter.name, filter.id);
        for sub_filter in filter.child_nodes.iter() {
            println!("\t{} ({})", sub_filter.name, sub_filter.id);
        }
    }
    Ok(())
}

fn print_programme(cli: &Cli, programme: &Programme) -> Result<(), anyhow::Error> {
    if cli.json {
        return print_json(programme);
    }
    println!("{} ({})", programme.name, programme.id);
    if let Some(certification) = &programme.certification {
        println!("Certificate: {}", certification);
    }
    println!("Rating: {}/100", programme.rating);
    println!("Formats: {:?}", programme.formats);
    println!();
    println!("{}", programme.synopsis);
    Ok(())
}
