//! Kinship relationship between two people in the family graph
//!
//! Finds the nearest common ancestor of two people, measures each person's
//! distance up to it, and looks the pair of distances up in a kinship table
//! ("father", "first cousin", "great great grandmother", ...). The label is
//! worded from person 1's point of view: "id1 is the <label> of id2".

use crate::core::models::{AdjList, NodeId, NodeLookup};
use std::collections::{HashMap, VecDeque};
use std::sync::LazyLock;

/// Distances covered by the kinship table; anything further apart is
/// reported as no close relationship.
const TABLE_DIMENSION: usize = 8;

/// One cell of the kinship table: labels by gender of person 1.
#[derive(Debug, Clone, Default)]
struct KinshipCell {
    male: Option<String>,
    female: Option<String>,
    neutral: Option<String>,
}

impl KinshipCell {
    fn labeled(male: Option<&str>, female: Option<&str>, neutral: Option<&str>) -> Self {
        Self {
            male: male.map(str::to_string),
            female: female.map(str::to_string),
            neutral: neutral.map(str::to_string),
        }
    }

    fn label_for(&self, gender: Option<&str>) -> Option<String> {
        let gendered = match gender {
            Some("male") => self.male.as_deref(),
            Some("female") => self.female.as_deref(),
            _ => None,
        };
        gendered.or(self.neutral.as_deref()).map(str::to_string)
    }
}

/// Kinship table indexed by `[d1][d2]`, the two distances from the common
/// ancestor. Built once and reused across calls.
static KINSHIP_TABLE: LazyLock<Vec<Vec<KinshipCell>>> = LazyLock::new(build_kinship_table);

fn build_kinship_table() -> Vec<Vec<KinshipCell>> {
    let cell = KinshipCell::labeled;

    let mut table = vec![vec![KinshipCell::default(); TABLE_DIMENSION]; TABLE_DIMENSION];

    table[0][1] = cell(Some("father"), Some("mother"), Some("parent"));
    table[1][0] = cell(Some("son"), Some("daughter"), Some("child"));
    table[1][1] = cell(Some("brother"), Some("sister"), Some("sibling"));
    table[1][2] = cell(Some("uncle"), Some("aunt"), None);
    table[2][1] = cell(Some("nephew"), Some("niece"), Some("nibling"));
    table[3][1] = cell(Some("great nephew"), Some("great niece"), None);
    table[1][3] = cell(Some("great uncle"), Some("great aunt"), None);
    table[2][2] = cell(Some("first cousin"), Some("first cousin"), None);
    table[3][3] = cell(Some("second cousin"), Some("second cousin"), None);
    table[4][4] = cell(Some("third cousin"), Some("third cousin"), None);
    table[5][5] = cell(Some("fourth cousin"), Some("fourth cousin"), None);

    // Grandparent chain: [0][2] grandparent, [0][3] great grandparent, ...
    iterate_great(
        &mut table,
        "grandfather",
        "grandmother",
        "grandparent",
        GreatDirection::Up,
    );
    // Grandchild chain: [2][0] grandchild, [3][0] great grandchild, ...
    iterate_great(
        &mut table,
        "grandson",
        "granddaughter",
        "grandchild",
        GreatDirection::Down,
    );

    table
}

enum GreatDirection {
    Up,
    Down,
}

fn iterate_great(
    table: &mut [Vec<KinshipCell>],
    male: &str,
    female: &str,
    neutral: &str,
    direction: GreatDirection,
) {
    let mut male = male.to_string();
    let mut female = female.to_string();
    let mut neutral = neutral.to_string();

    for i in 2..TABLE_DIMENSION {
        let cell = match direction {
            GreatDirection::Up => &mut table[0][i],
            GreatDirection::Down => &mut table[i][0],
        };
        cell.male = Some(male.clone());
        cell.female = Some(female.clone());
        cell.neutral = Some(neutral.clone());

        male = format!("great {male}");
        female = format!("great {female}");
        neutral = format!("great {neutral}");
    }
}

/// Build the reverse graph: child → parents.
#[must_use]
pub fn invert(adj_list: &AdjList) -> AdjList {
    let mut inverted = AdjList::new();

    let mut parents: Vec<&String> = adj_list.keys().collect();
    parents.sort();

    for parent in parents {
        inverted.entry(parent.clone()).or_default();
        if let Some(children) = adj_list.get(parent) {
            for child in children {
                let entry = inverted.entry(child.clone()).or_default();
                if !entry.contains(parent) {
                    entry.push(parent.clone());
                }
            }
        }
    }

    inverted
}

/// Distance from `node` to each of its ancestors, walking the reverse graph
/// breadth-first. The node itself is at distance 0.
#[must_use]
pub fn ancestor_distances(node: &str, parents_of: &AdjList) -> HashMap<NodeId, usize> {
    let mut distances = HashMap::new();
    distances.insert(node.to_string(), 0);

    let mut queue: VecDeque<NodeId> = VecDeque::new();
    queue.push_back(node.to_string());

    while let Some(current) = queue.pop_front() {
        let next_distance = distances.get(&current).copied().unwrap_or(0) + 1;
        if let Some(parents) = parents_of.get(&current) {
            for parent in parents {
                if !distances.contains_key(parent) {
                    distances.insert(parent.clone(), next_distance);
                    queue.push_back(parent.clone());
                }
            }
        }
    }

    distances
}

/// Find the common ancestor of two people that minimizes the combined
/// distance, together with each person's distance to it.
///
/// Ties on combined distance are broken by the smaller node id so the result
/// is reproducible for identical input.
///
/// # Returns
/// `(ancestor, d1, d2)` or `None` when no common ancestor exists
#[must_use]
pub fn nearest_common_ancestor(
    id1: &str,
    id2: &str,
    adj_list: &AdjList,
) -> Option<(NodeId, usize, usize)> {
    let parents_of = invert(adj_list);
    let from_first = ancestor_distances(id1, &parents_of);
    let from_second = ancestor_distances(id2, &parents_of);

    let mut best: Option<(NodeId, usize, usize)> = None;
    for (ancestor, d1) in &from_first {
        if let Some(d2) = from_second.get(ancestor) {
            let better = match &best {
                None => true,
                Some((current, b1, b2)) => {
                    let combined = d1 + d2;
                    let best_combined = b1 + b2;
                    combined < best_combined
                        || (combined == best_combined && ancestor.as_str() < current.as_str())
                }
            };
            if better {
                best = Some((ancestor.clone(), *d1, *d2));
            }
        }
    }

    best
}

/// Describe how person 1 relates to person 2 ("father", "first cousin", ...).
///
/// Gender of person 1 selects the gendered label where the table has one;
/// otherwise the neutral label applies. Returns `None` when the two people
/// share no common ancestor or sit further apart than the table covers.
///
/// # Arguments
/// * `id1` - Person the label describes
/// * `id2` - Person the label is relative to
/// * `adj_list` - Directed parent → children adjacency list
/// * `lookup` - Person records, consulted for person 1's gender
#[must_use]
pub fn calculate_relationship(
    id1: &str,
    id2: &str,
    adj_list: &AdjList,
    lookup: &NodeLookup,
) -> Option<String> {
    let (_, d1, d2) = nearest_common_ancestor(id1, id2, adj_list)?;

    if d1 >= TABLE_DIMENSION || d2 >= TABLE_DIMENSION {
        return None;
    }

    let gender = lookup.get(id1).and_then(|p| p.gender.as_deref());
    KINSHIP_TABLE[d1][d2].label_for(gender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Person;

    fn adj(entries: &[(&str, &[&str])]) -> AdjList {
        entries
            .iter()
            .map(|(k, vs)| {
                (
                    (*k).to_string(),
                    vs.iter().map(|v| (*v).to_string()).collect(),
                )
            })
            .collect()
    }

    fn lookup(entries: &[(&str, &str)]) -> NodeLookup {
        entries
            .iter()
            .map(|(id, gender)| {
                let mut person = Person::named(id);
                person.gender = Some((*gender).to_string());
                ((*id).to_string(), person)
            })
            .collect()
    }

    #[test]
    fn invert_builds_child_to_parent_edges() {
        let graph = adj(&[("A", &["B", "C"])]);
        let inverted = invert(&graph);

        assert_eq!(inverted.get("B"), Some(&vec!["A".to_string()]));
        assert_eq!(inverted.get("C"), Some(&vec!["A".to_string()]));
        assert!(inverted.get("A").is_some_and(Vec::is_empty));
    }

    #[test]
    fn ancestor_distances_counts_generations() {
        // A -> B -> C
        let graph = adj(&[("A", &["B"]), ("B", &["C"])]);
        let parents_of = invert(&graph);
        let distances = ancestor_distances("C", &parents_of);

        assert_eq!(distances.get("C"), Some(&0));
        assert_eq!(distances.get("B"), Some(&1));
        assert_eq!(distances.get("A"), Some(&2));
    }

    #[test]
    fn common_ancestor_of_siblings() {
        let graph = adj(&[("P", &["A", "B"])]);
        let (ancestor, d1, d2) =
            nearest_common_ancestor("A", "B", &graph).expect("siblings share a parent");

        assert_eq!(ancestor, "P");
        assert_eq!((d1, d2), (1, 1));
    }

    #[test]
    fn ancestor_of_the_other_person() {
        let graph = adj(&[("A", &["B"]), ("B", &["C"])]);
        let (ancestor, d1, d2) =
            nearest_common_ancestor("A", "C", &graph).expect("A is C's grandparent");

        assert_eq!(ancestor, "A");
        assert_eq!((d1, d2), (0, 2));
    }

    #[test]
    fn no_common_ancestor() {
        let graph = adj(&[("A", &["B"]), ("C", &["D"])]);
        assert!(nearest_common_ancestor("B", "D", &graph).is_none());
    }

    #[test]
    fn labels_parent_and_child() {
        let graph = adj(&[("A", &["B"])]);
        let people = lookup(&[("A", "male"), ("B", "female")]);

        assert_eq!(
            calculate_relationship("A", "B", &graph, &people).as_deref(),
            Some("father")
        );
        assert_eq!(
            calculate_relationship("B", "A", &graph, &people).as_deref(),
            Some("daughter")
        );
    }

    #[test]
    fn labels_siblings_with_neutral_fallback() {
        let graph = adj(&[("P", &["A", "B"])]);
        let people = lookup(&[("A", "female")]);

        assert_eq!(
            calculate_relationship("A", "B", &graph, &people).as_deref(),
            Some("sister")
        );
        // B has no person record at all, so the neutral label applies
        assert_eq!(
            calculate_relationship("B", "A", &graph, &people).as_deref(),
            Some("sibling")
        );
    }

    #[test]
    fn labels_grandparent_chain_with_great_prefixes() {
        // A -> B -> C -> D -> E
        let graph = adj(&[("A", &["B"]), ("B", &["C"]), ("C", &["D"]), ("D", &["E"])]);
        let people = lookup(&[("A", "female")]);

        assert_eq!(
            calculate_relationship("A", "C", &graph, &people).as_deref(),
            Some("grandmother")
        );
        assert_eq!(
            calculate_relationship("A", "D", &graph, &people).as_deref(),
            Some("great grandmother")
        );
        assert_eq!(
            calculate_relationship("A", "E", &graph, &people).as_deref(),
            Some("great great grandmother")
        );
    }

    #[test]
    fn labels_first_cousins() {
        // Grandparent G with two children P1, P2; their children A, B are cousins
        let graph = adj(&[("G", &["P1", "P2"]), ("P1", &["A"]), ("P2", &["B"])]);
        let people = lookup(&[("A", "male")]);

        assert_eq!(
            calculate_relationship("A", "B", &graph, &people).as_deref(),
            Some("first cousin")
        );
    }

    #[test]
    fn uncle_without_gender_has_no_label() {
        // [1][2] carries only gendered labels
        let graph = adj(&[("G", &["U", "P"]), ("P", &["N"])]);
        let people = NodeLookup::new();

        assert!(calculate_relationship("U", "N", &graph, &people).is_none());
    }

    #[test]
    fn distant_relatives_have_no_label() {
        // Chain long enough to push the distance past the table
        let graph = adj(&[
            ("A", &["B"]),
            ("B", &["C"]),
            ("C", &["D"]),
            ("D", &["E"]),
            ("E", &["F"]),
            ("F", &["G"]),
            ("G", &["H"]),
            ("H", &["I"]),
        ]);
        let people = lookup(&[("A", "male")]);

        assert!(calculate_relationship("A", "I", &graph, &people).is_none());
    }

    #[test]
    fn unrelated_people_have_no_label() {
        let graph = adj(&[("A", &["B"]), ("C", &["D"])]);
        let people = lookup(&[("B", "male")]);

        assert!(calculate_relationship("B", "D", &graph, &people).is_none());
    }
}
