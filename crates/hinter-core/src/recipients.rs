//! Recipient expression resolution

use std::collections::BTreeSet;

use crate::error::ResolutionError;
use crate::group::{GROUP_PREFIX, Groups};

/// One entry of a draft's `to` or `except` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientExpr<'a> {
    Peer(&'a str),
    Group(&'a str),
}

impl<'a> RecipientExpr<'a> {
    pub fn parse(expr: &'a str) -> Self {
        match expr.strip_prefix(GROUP_PREFIX) {
            Some(group) => Self::Group(group),
            None => Self::Peer(expr),
        }
    }
}

/// Resolve `to` minus `except` into a set of peer aliases.
///
/// Both lists are checked in full: an unknown alias or group in `except` is
/// rejected even when `to` would make it irrelevant.
pub fn resolve_recipients(
    to: &[String],
    except: &[String],
    groups: &Groups,
    known_peers: &BTreeSet<String>,
) -> Result<BTreeSet<String>, ResolutionError> {
    let included = expand(to, groups, known_peers)?;
    let excluded = expand(except, groups, known_peers)?;
    Ok(included.difference(&excluded).cloned().collect())
}

fn expand(
    exprs: &[String],
    groups: &Groups,
    known_peers: &BTreeSet<String>,
) -> Result<BTreeSet<String>, ResolutionError> {
    let mut peers = BTreeSet::new();
    for expr in exprs {
        match RecipientExpr::parse(expr) {
            RecipientExpr::Group(name) => {
                let members = groups
                    .get(name)
                    .ok_or_else(|| ResolutionError::UnknownGroup(name.to_string()))?;
                peers.extend(members.iter().cloned());
            }
            RecipientExpr::Peer(alias) => {
                if !known_peers.contains(alias) {
                    return Err(ResolutionError::UnknownPeer(alias.to_string()));
                }
                peers.insert(alias.to_string());
            }
        }
    }
    Ok(peers)
}

/// Every expression a draft may use: `group:<name>` for each group, then
/// each peer alias.
pub fn available_recipients(groups: &Groups, aliases: &[String]) -> Vec<String> {
    groups
        .keys()
        .map(|group| format!("{GROUP_PREFIX}{group}"))
        .chain(aliases.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn fixture() -> (Groups, BTreeSet<String>) {
        let peers: BTreeSet<String> = ["alice", "bob", "carol"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut groups = Groups::new();
        groups.insert("all".into(), peers.iter().cloned().collect());
        groups.insert("friends".into(), strings(&["alice", "bob"]));
        (groups, peers)
    }

    #[test]
    fn parses_expressions() {
        assert_eq!(RecipientExpr::parse("alice"), RecipientExpr::Peer("alice"));
        assert_eq!(
            RecipientExpr::parse("group:friends"),
            RecipientExpr::Group("friends")
        );
        assert_eq!(RecipientExpr::parse("group:"), RecipientExpr::Group(""));
    }

    #[test]
    fn group_minus_peer() {
        let (groups, peers) = fixture();
        let resolved =
            resolve_recipients(&strings(&["group:all"]), &strings(&["bob"]), &groups, &peers)
                .unwrap();
        assert_eq!(resolved, BTreeSet::from(["alice".to_string(), "carol".to_string()]));
    }

    #[test]
    fn except_wins_over_to() {
        let (groups, peers) = fixture();
        let resolved = resolve_recipients(
            &strings(&["alice", "carol"]),
            &strings(&["group:friends"]),
            &groups,
            &peers,
        )
        .unwrap();
        assert_eq!(resolved, BTreeSet::from(["carol".to_string()]));
    }

    #[test]
    fn unknown_names_are_rejected() {
        let (groups, peers) = fixture();
        assert_eq!(
            resolve_recipients(&strings(&["group:nope"]), &[], &groups, &peers),
            Err(ResolutionError::UnknownGroup("nope".into()))
        );
        assert_eq!(
            resolve_recipients(&strings(&["alice"]), &strings(&["dave"]), &groups, &peers),
            Err(ResolutionError::UnknownPeer("dave".into()))
        );
    }

    #[test]
    fn lists_groups_before_peers() {
        let (groups, peers) = fixture();
        let aliases: Vec<String> = peers.into_iter().collect();
        assert_eq!(
            available_recipients(&groups, &aliases),
            strings(&["group:all", "group:friends", "alice", "bob", "carol"])
        );
    }

    fn expr_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(vec!["alice", "bob", "carol"]).prop_map(String::from),
            prop::sample::select(vec!["group:all", "group:friends"]).prop_map(String::from),
        ]
    }

    proptest! {
        #[test]
        fn result_is_to_minus_except(
            to in prop::collection::vec(expr_strategy(), 0..6),
            except in prop::collection::vec(expr_strategy(), 0..6),
        ) {
            let (groups, peers) = fixture();
            let resolved = resolve_recipients(&to, &except, &groups, &peers).unwrap();
            let included = expand(&to, &groups, &peers).unwrap();
            let excluded = expand(&except, &groups, &peers).unwrap();

            for peer in &resolved {
                prop_assert!(included.contains(peer));
                prop_assert!(!excluded.contains(peer));
            }
            for peer in &included {
                prop_assert!(resolved.contains(peer) || excluded.contains(peer));
            }
            prop_assert!(resolved.is_subset(&peers));
        }
    }
}
