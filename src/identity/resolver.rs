use log::debug;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::key::{PlayerKey, fallback_key, normalize};
use crate::config::IdentityOverride;
use crate::domain::TournamentResult;

pub type PlayerGroups = BTreeMap<PlayerKey, Vec<TournamentResult>>;

/// Name and handle shown for a resolved player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayIdentity {
    pub name: String,
    pub username: String,
}

/// Decides which results belong to the same real player.
///
/// Mis-merges are not errors: there is no identity registry to check against,
/// so a resolver only ever does its best.
pub trait PlayerResolver {
    fn group_by_player(&self, results: &[TournamentResult]) -> PlayerGroups;

    fn display_identity(&self, key: &PlayerKey, results: &[TournamentResult]) -> DisplayIdentity;
}

struct AliasTable {
    canonical: IdentityOverride,
    key: String,
    aliases: Vec<String>,
}

impl AliasTable {
    fn new(canonical: &IdentityOverride) -> Self {
        let key = if canonical.username.trim().is_empty() {
            normalize(&canonical.name)
        } else {
            normalize(&canonical.username)
        };

        let aliases = canonical
            .aliases
            .iter()
            .map(|alias| normalize(alias))
            .filter(|alias| !alias.is_empty())
            .collect();

        Self {
            canonical: canonical.clone(),
            key,
            aliases,
        }
    }

    fn matches(&self, name: &str, handle: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| name.contains(alias.as_str()) || handle.contains(alias.as_str()))
    }
}

/// Name/handle matching with manual overrides.
///
/// 1. Overrides first: an alias found inside the name or handle forces the
///    override's bucket.
/// 2. A non-zero Challonge user id is the key.
/// 3. Otherwise the normalized name/handle key, which joins a user id bucket
///    when that key maps to exactly one user id elsewhere in the dataset.
pub struct HeuristicResolver {
    overrides: Vec<AliasTable>,
}

impl Default for HeuristicResolver {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl HeuristicResolver {
    pub fn new(overrides: &[IdentityOverride]) -> Self {
        Self {
            overrides: overrides.iter().map(AliasTable::new).collect(),
        }
    }

    fn find_override(&self, result: &TournamentResult) -> Option<&AliasTable> {
        let name = normalize(&result.participant_name);
        let handle = normalize(&result.challonge_username);

        self.overrides
            .iter()
            .find(|table| table.matches(&name, &handle))
    }

    fn find_override_by_key(&self, key: &str) -> Option<&AliasTable> {
        self.overrides.iter().find(|table| table.key == key)
    }

    fn resolve_key(
        &self,
        result: &TournamentResult,
        linked_ids: &HashMap<String, BTreeSet<u64>>,
    ) -> PlayerKey {
        if let Some(table) = self.find_override(result) {
            return PlayerKey::Override(table.key.clone());
        }

        if result.challonge_user_id > 0 {
            return PlayerKey::UserId(result.challonge_user_id);
        }

        let key = fallback_key(&result.participant_name, &result.challonge_username);
        match linked_ids.get(&key) {
            Some(ids) if ids.len() == 1 => ids
                .first()
                .map(|id| PlayerKey::UserId(*id))
                .unwrap_or(PlayerKey::Alias(key)),
            _ => PlayerKey::Alias(key),
        }
    }

    /// Fallback keys seen next to a user id, for results that lack one.
    fn link_fallback_keys(&self, results: &[TournamentResult]) -> HashMap<String, BTreeSet<u64>> {
        let mut linked: HashMap<String, BTreeSet<u64>> = HashMap::new();

        for result in results {
            if result.challonge_user_id == 0 || self.find_override(result).is_some() {
                continue;
            }
            let key = fallback_key(&result.participant_name, &result.challonge_username);
            linked
                .entry(key)
                .or_default()
                .insert(result.challonge_user_id);
        }

        linked
    }
}

impl PlayerResolver for HeuristicResolver {
    fn group_by_player(&self, results: &[TournamentResult]) -> PlayerGroups {
        let linked_ids = self.link_fallback_keys(results);
        let mut groups: PlayerGroups = BTreeMap::new();

        for result in results {
            let key = self.resolve_key(result, &linked_ids);
            groups.entry(key).or_default().push(result.clone());
        }

        for group in groups.values_mut() {
            group.sort_by(compare_results);
        }

        debug!(
            "Grouped {} results into {} players",
            results.len(),
            groups.len()
        );
        groups
    }

    fn display_identity(&self, key: &PlayerKey, results: &[TournamentResult]) -> DisplayIdentity {
        if let PlayerKey::Override(key) = key {
            if let Some(table) = self.find_override_by_key(key) {
                return DisplayIdentity {
                    name: table.canonical.name.clone(),
                    username: table.canonical.username.clone(),
                };
            }
        }

        DisplayIdentity {
            name: most_complete(results.iter().map(|r| r.participant_name.as_str())),
            username: most_complete(results.iter().map(|r| r.challonge_username.as_str())),
        }
    }
}

/// Longest non-empty string; equal lengths resolve to the smaller string so
/// the pick does not depend on input order.
fn most_complete<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .min_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        })
        .unwrap_or_default()
        .to_string()
}

fn compare_results(a: &TournamentResult, b: &TournamentResult) -> std::cmp::Ordering {
    a.tournament_id
        .cmp(&b.tournament_id)
        .then_with(|| a.final_rank.cmp(&b.final_rank))
        .then_with(|| a.participant_name.cmp(&b.participant_name))
        .then_with(|| a.challonge_username.cmp(&b.challonge_username))
        .then_with(|| a.challonge_user_id.cmp(&b.challonge_user_id))
}
