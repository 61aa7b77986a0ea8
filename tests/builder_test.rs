//! Tests for building topologies from relationship lists

use rstest::rstest;

use topology::domain::{ConfigItem, DomainError, Field, Topology};
use topology::util::testing;

fn names(items: &[ConfigItem]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

/// Every (root, parent, child) edge present in the topology, with collapsed
/// parents reported under the root's own name.
fn edges(topology: &Topology) -> Vec<(String, String, String)> {
    let mut out = Vec::new();
    for root in &topology.roots {
        for parent in &root.children {
            if parent.children.is_empty() {
                out.push((root.name.clone(), root.name.clone(), parent.name.clone()));
            }
            for child in &parent.children {
                out.push((root.name.clone(), parent.name.clone(), child.name.clone()));
            }
        }
    }
    out.sort();
    out
}

#[test]
fn given_sample_file_when_building_then_matches_expected_tree() {
    testing::init_test_setup();
    let text = include_str!("resources/topology/sample.txt");

    let topology = Topology::parse(text).unwrap();

    assert_eq!(names(&topology.roots), vec!["SUP_PR1", "SAS_PR1"]);

    let sup = topology.root("SUP_PR1").unwrap();
    assert_eq!(names(&sup.children), vec!["Cronjobs"]);
    assert_eq!(names(&sup.children[0].children), vec!["Archive"]);

    let sas = topology.root("SAS_PR1").unwrap();
    assert_eq!(names(&sas.children), vec!["Cronjobs", "Process"]);
    assert_eq!(names(&sas.child("Cronjobs").unwrap().children), vec!["Archive"]);
    assert_eq!(
        names(&sas.child("Process").unwrap().children),
        vec!["node.js", "oo_central"]
    );
    assert!(sas.child("Process").unwrap().children.iter().all(|c| c.children.is_empty()));
}

#[test]
fn given_self_referencing_root_when_building_then_no_intermediate_node() {
    let topology = Topology::parse("A;A;B").unwrap();

    assert_eq!(names(&topology.roots), vec!["A"]);
    assert_eq!(names(&topology.roots[0].children), vec!["B"]);
    assert_eq!(topology.item_count(), 2);
}

#[test]
fn given_byte_order_mark_when_building_then_single_root() {
    let topology = Topology::parse("\u{feff}A;B;C\r\nA;B;D").unwrap();

    assert_eq!(names(&topology.roots), vec!["A"]);
    assert_eq!(names(&topology.roots[0].children[0].children), vec!["C", "D"]);
}

#[test]
fn given_messy_file_when_building_then_blank_lines_and_duplicates_ignored() {
    let text = include_str!("resources/topology/messy.txt");

    let topology = Topology::parse(text).unwrap();

    assert_eq!(names(&topology.roots), vec!["SAS_PR1"]);
    let sas = &topology.roots[0];
    assert_eq!(names(&sas.children), vec!["Database", "Process"]);
    assert_eq!(names(&sas.child("Process").unwrap().children), vec!["node.js"]);
}

#[test]
fn given_duplicated_input_when_building_then_same_as_single() {
    let text = include_str!("resources/topology/sample.txt");
    let doubled = format!("{text}{text}");

    assert_eq!(Topology::parse(text).unwrap(), Topology::parse(&doubled).unwrap());
}

#[rstest]
#[case("r;p;a\nr;p;b\nr;q;c\ns;p;a")]
#[case("s;p;a\nr;q;c\nr;p;b\nr;p;a")]
#[case("r;q;c\nr;p;a\ns;p;a\nr;p;b\nr;q;c")]
fn given_any_line_order_when_building_then_same_edges(#[case] text: &str) {
    let topology = Topology::parse(text).unwrap();

    assert_eq!(
        edges(&topology),
        vec![
            ("r".into(), "p".into(), "a".into()),
            ("r".into(), "p".into(), "b".into()),
            ("r".into(), "q".into(), "c".into()),
            ("s".into(), "p".into(), "a".into()),
        ]
    );
}

#[test]
fn given_lines_in_order_when_building_then_first_seen_order_kept() {
    let topology = Topology::parse("z;m;3\na;m;2\nz;b;1\nz;m;0").unwrap();

    assert_eq!(names(&topology.roots), vec!["z", "a"]);
    let z = topology.root("z").unwrap();
    assert_eq!(names(&z.children), vec!["m", "b"]);
    assert_eq!(names(&z.child("m").unwrap().children), vec!["3", "0"]);
}

#[test]
fn given_repeated_names_when_building_then_siblings_unique() {
    let topology = Topology::parse("r;p;c\nr;p;c\nr;r;p\nr;p;c").unwrap();

    // `r;r;p` resolves to the existing parent `p` under root `r`
    let r = topology.root("r").unwrap();
    assert_eq!(names(&r.children), vec!["p"]);
    assert_eq!(names(&r.children[0].children), vec!["c"]);
    assert!(topology.validate().is_ok());
}

#[rstest]
#[case("A;B", 2)]
#[case("A;B;C;D", 4)]
fn given_wrong_field_count_when_building_then_format_error(
    #[case] line: &str,
    #[case] found: usize,
) {
    let text = format!("X;Y;Z\n{line}\n");

    let err = Topology::parse(&text).unwrap_err();

    assert_eq!(
        err,
        DomainError::FieldCount {
            line: 2,
            total: 2,
            found,
            content: line.to_string(),
        }
    );
}

#[test]
fn given_empty_field_when_building_then_format_error() {
    let err = Topology::parse("A;;C").unwrap_err();

    assert!(matches!(
        err,
        DomainError::EmptyField {
            field: Field::Parent,
            line: 1,
            ..
        }
    ));
}
