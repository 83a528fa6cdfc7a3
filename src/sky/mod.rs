use client::Sky;
use levenshtein::levenshtein;
use models::{catalogue::Catalogue, filter::Filter, region::Region, Node, ParentNode};

pub mod client;
pub mod decode;
pub mod models;

#[cfg(test)]
mod decode_tests;

/// Region names further than this from the requested name are not a match.
const MAX_REGION_DISTANCE: usize = 4;

/// The sections of the on demand catalogue that carry filters.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Cinema,
    BoxSets,
    Sports,
}

const CINEMA: &str = "Sky Cinema";
const BOX_SETS: &str = "Sky Box Sets";
const CATCH_UP: &str = "Catch Up";
const SPORTS: &str = "Sky Sports";

/// The first child of `parent` with the given name.
pub fn find_child<'a, P: ParentNode>(parent: &'a P, name: &str) -> Option<&'a P::Child> {
    parent.child_nodes().iter().find(|child| child.name() == name)
}

/// Fetches the filters a user can narrow a section of the catalogue with.
/// A section that is missing from the catalogue has no filters.
pub async fn get_filters(
    sky: &Sky,
    kind: FilterKind,
    region: &Region,
) -> Result<Vec<Filter>, anyhow::Error> {
    let filters = match kind {
        FilterKind::Cinema | FilterKind::BoxSets => {
            let name = if kind == FilterKind::Cinema {
                CINEMA
            } else {
                BOX_SETS
            };
            let root: Catalogue<Catalogue<Filter>> = sky.get_root_catalogue(region).await?;
            find_child(&root, name).map(|section| section.child_nodes.clone())
        }
        FilterKind::Sports => {
            // Sports sit one level further down, under catch up.
            let root: Catalogue<Catalogue<Catalogue<Filter>>> =
                sky.get_root_catalogue(region).await?;
            find_child(&root, CATCH_UP)
                .and_then(|catch_up| find_child(catch_up, SPORTS))
                .map(|sports| sports.child_nodes.clone())
        }
    };

    match filters {
        Some(filters) => Ok(filters),
        None => {
            log::warn!("no {:?} section in the catalogue for {}", kind, region.name);
            Ok(Vec::new())
        }
    }
}

/// Fetches several catalogues at once.
pub async fn get_catalogues(
    sky: &Sky,
    ids: &[String],
    region: &Region,
) -> Result<Vec<Catalogue<models::programme::Programme>>, anyhow::Error> {
    futures::future::try_join_all(ids.iter().map(|id| sky.get_catalogue(id, region))).await
}

/// The region whose name is closest to `name`, ignoring case. An exact match
/// always wins.
pub fn closest_region<'a>(regions: &'a [Region], name: &str) -> Option<&'a Region> {
    let name = name.trim().to_lowercase();
    let mut scored: Vec<(usize, &Region)> = regions
        .iter()
        .map(|region| (levenshtein(&region.name.to_lowercase(), &name), region))
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);

    scored
        .into_iter()
        .next()
        .filter(|(distance, _)| *distance <= MAX_REGION_DISTANCE)
        .map(|(_, region)| region)
}

/// Orders regions by area code, then sub-area code.
pub fn sort_regions(regions: &mut [Region]) {
    // One integer key for radsort: the area code fills the high 32 bits and
    // the sub-area code, shifted to be non-negative, fills the low 32 bits.
    radsort::sort_by_key(regions, |region| {
        let area = (region.bouquet as i64) << 32;
        let sub_area = region.subbouquet as i64 - i32::MIN as i64;
        area + sub_area
    });
}
