//! Validated chain/venue registry

use std::collections::BTreeMap;
use swap_router_types::{ChainId, Venue};
use tracing::{debug, info};

use crate::{
    default_chain_configs, validate_chains, ChainConfig, RegistryError, Result, VenueOverrides,
};

/// Static chain/venue configuration, validated once at construction
///
/// The registry is immutable while shared; build one per process (or per
/// test) and hand it to consumers behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: BTreeMap<ChainId, ChainConfig>,
    venues_by_chain: BTreeMap<ChainId, Vec<Venue>>,
}

impl ChainRegistry {
    /// Validate the chain table and build the dependency index
    pub fn new(chains: impl IntoIterator<Item = ChainConfig>) -> Result<Self> {
        let chains: Vec<ChainConfig> = chains.into_iter().map(ChainConfig::normalized).collect();
        validate_chains(&chains)?;

        let chains: BTreeMap<ChainId, ChainConfig> =
            chains.into_iter().map(|c| (c.chain_id, c)).collect();
        let venues_by_chain = build_index(&chains);

        info!(chains = chains.len(), "chain registry initialized");
        Ok(Self {
            chains,
            venues_by_chain,
        })
    }

    /// Registry over the built-in production chain table
    pub fn default_mainnets() -> Result<Self> {
        Self::new(default_chain_configs())
    }

    /// Overrides for a venue on a chain
    pub fn quote_config(
        &self,
        chain_id: ChainId,
        venue: Venue,
    ) -> std::result::Result<&VenueOverrides, RegistryError> {
        self.chain(chain_id)?
            .venues
            .get(&venue)
            .ok_or(RegistryError::UnsupportedVenue { chain_id, venue })
    }

    pub fn chain(&self, chain_id: ChainId) -> std::result::Result<&ChainConfig, RegistryError> {
        self.chains
            .get(&chain_id)
            .ok_or(RegistryError::UnsupportedChain(chain_id))
    }

    pub fn supports(&self, chain_id: ChainId, venue: Venue) -> bool {
        self.quote_config(chain_id, venue).is_ok()
    }

    pub fn wrapped_native(&self, chain_id: ChainId) -> std::result::Result<&str, RegistryError> {
        Ok(self.chain(chain_id)?.wrapped_native.as_str())
    }

    /// Supported venues per chain, each listed after its dependencies
    pub fn venues_by_dependency_graph(&self) -> &BTreeMap<ChainId, Vec<Venue>> {
        &self.venues_by_chain
    }

    pub fn venues_for_chain(&self, chain_id: ChainId) -> std::result::Result<&[Venue], RegistryError> {
        self.venues_by_chain
            .get(&chain_id)
            .map(Vec::as_slice)
            .ok_or(RegistryError::UnsupportedChain(chain_id))
    }

    pub fn chain_ids(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.chains.keys().copied()
    }

    /// Replace (or add) one chain's configuration
    ///
    /// The whole table is validated again and the index rebuilt. On error the
    /// registry is left untouched.
    pub fn replace_chain(&mut self, config: ChainConfig) -> Result<()> {
        let config = config.normalized();
        let mut chains = self.chains.clone();
        chains.insert(config.chain_id, config);

        let table: Vec<ChainConfig> = chains.values().cloned().collect();
        validate_chains(&table)?;

        self.venues_by_chain = build_index(&chains);
        self.chains = chains;
        Ok(())
    }
}

fn build_index(chains: &BTreeMap<ChainId, ChainConfig>) -> BTreeMap<ChainId, Vec<Venue>> {
    chains
        .iter()
        .map(|(chain_id, chain)| {
            let mut ordered = Vec::with_capacity(chain.venues.len());
            for venue in chain.venues.keys() {
                push_with_dependencies(*venue, &mut ordered);
            }
            debug!(chain_id, venues = ?ordered, "indexed chain venues");
            (*chain_id, ordered)
        })
        .collect()
}

fn push_with_dependencies(venue: Venue, ordered: &mut Vec<Venue>) {
    if ordered.contains(&venue) {
        return;
    }
    for dependency in venue.dependencies() {
        push_with_dependencies(*dependency, ordered);
    }
    ordered.push(venue);
}
