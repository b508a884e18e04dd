use blo_core::{Anchor, Pane, PaneTree, Rectangle, Tag};
use blo_text::{SparsePane, XmlOptions, json, xml};
use pretty_assertions::assert_eq;

fn flat() -> XmlOptions {
    XmlOptions {
        indent: 0,
        root_element: Some("blo".to_string()),
    }
}

#[test]
fn default_pane_projects_only_rectangle() {
    let tree = PaneTree::new(Pane::new(Tag::NONE, Rectangle::new(10, 20, 110, 70)));
    assert_eq!(
        xml::to_string(&tree, &flat()).unwrap(),
        r#"<blo><pane><rectangle left="10" top="20" width="100" height="50"/></pane></blo>"#
    );
    assert_eq!(
        json::to_value(&tree).unwrap(),
        serde_json::json!({
            "rectangle": { "left": 10, "top": 20, "width": 100, "height": 50 }
        })
    );
}

#[test]
fn nested_tree_keeps_child_order_and_sparsity() {
    let mut root = Pane::new(Tag::pack("ROOT"), Rectangle::new(0, 0, 640, 480));
    root.set_visible(false);
    let mut tree = PaneTree::new(root);

    let mut spin = Pane::new(Tag::pack("spin"), Rectangle::new(0, 0, 32, 32));
    spin.set_angle(90.0);
    spin.set_anchor(Anchor::CENTER);
    let first = tree.append(tree.root(), spin).unwrap();

    let mut fade = Pane::new(Tag::pack("fade"), Rectangle::new(0, 0, 8, 8));
    fade.set_alpha(128);
    fade.set_inherit_alpha(false);
    tree.append(first, fade).unwrap();

    tree.append(tree.root(), Pane::new(Tag::pack("last"), Rectangle::new(1, 1, 2, 2)))
        .unwrap();

    let expected = concat!(
        r#"<blo>"#,
        r#"<pane id="ROOT" visible="false">"#,
        r#"<rectangle left="0" top="0" width="640" height="480"/>"#,
        r#"<pane id="spin">"#,
        r#"<rectangle left="0" top="0" width="32" height="32"/>"#,
        r#"<angle>90</angle>"#,
        r#"<anchor>Center</anchor>"#,
        r#"<pane id="fade">"#,
        r#"<rectangle left="0" top="0" width="8" height="8"/>"#,
        r#"<alpha inherit="false">128</alpha>"#,
        r#"</pane>"#,
        r#"</pane>"#,
        r#"<pane id="last">"#,
        r#"<rectangle left="1" top="1" width="1" height="1"/>"#,
        r#"</pane>"#,
        r#"</pane>"#,
        r#"</blo>"#,
    );
    assert_eq!(xml::to_string(&tree, &flat()).unwrap(), expected);

    let sparse = SparsePane::from_tree(&tree, tree.root()).unwrap();
    let ids: Vec<_> = sparse.children.iter().map(|c| c.id.clone().unwrap()).collect();
    assert_eq!(ids, ["spin", "last"]);
}

#[test]
fn out_of_grid_anchor_is_written_as_number() {
    let mut pane = Pane::new(Tag::NONE, Rectangle::new(0, 0, 1, 1));
    pane.set_anchor(Anchor(12));
    let tree = PaneTree::new(pane);
    let text = xml::to_string(&tree, &flat()).unwrap();
    assert!(text.contains("<anchor>12</anchor>"));
}

#[test]
fn indented_output_nests_panes() {
    let mut tree = PaneTree::new(Pane::new(Tag::pack("ROOT"), Rectangle::new(0, 0, 4, 4)));
    tree.append(tree.root(), Pane::new(Tag::pack("kid"), Rectangle::new(0, 0, 1, 1)))
        .unwrap();
    let text = xml::to_string(&tree, &XmlOptions::default()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first().copied(), Some("<blo>"));
    assert!(lines.contains(&r#"  <pane id="ROOT">"#));
    assert!(lines.contains(&r#"    <pane id="kid">"#));
    assert_eq!(lines.last().copied(), Some("</blo>"));
}
