//! Template catalog: the nested listing served by `GET /email-templates`.
//!
//! The backend groups template files into category folders which may nest
//! arbitrarily:
//!
//! ```json
//! { "templates": { "Marketing": { "files": ["welcome.html"], "Seasonal": { "files": [] } } } }
//! ```
//!
//! Every key of a folder other than `files` whose value is an object is a
//! subfolder. Folder and file order follow the backend's key order; nothing
//! here sorts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding the file names of a folder.
const FILES_KEY: &str = "files";

/// Response body of `GET /email-templates`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateListing {
    /// Top-level category folders, keyed by name.
    #[serde(default)]
    pub templates: Map<String, Value>,
}

impl TemplateListing {
    /// Flattens the listing into one entry per template file.
    #[must_use]
    pub fn flatten(&self) -> Vec<TemplateMeta> {
        flatten_listing(&self.templates)
    }

    /// Builds the folder tree shown by the template browser.
    #[must_use]
    pub fn tree(&self) -> Vec<TemplateFolder> {
        build_tree(&self.templates)
    }
}

/// One selectable template in the flattened catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateMeta {
    /// Category path, folders joined with `/`.
    pub category: String,
    /// File name; assumed unique across the catalog.
    pub filename: String,
    /// `category/filename`.
    pub path: String,
}

impl TemplateMeta {
    /// Creates an entry for `filename` inside `category`.
    #[must_use]
    pub fn new(category: impl Into<String>, filename: impl Into<String>) -> Self {
        let category = category.into();
        let filename = filename.into();
        let path = format!("{category}/{filename}");
        Self {
            category,
            filename,
            path,
        }
    }
}

impl std::fmt::Display for TemplateMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.filename)
    }
}

/// A category folder with its files and subfolders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFolder {
    /// Folder name (last path component).
    pub name: String,
    /// Full category path from the top level, joined with `/`.
    pub path: String,
    /// Template files directly inside this folder.
    pub files: Vec<String>,
    /// Subfolders, in listing order.
    pub children: Vec<TemplateFolder>,
}

impl TemplateFolder {
    fn from_node(name: &str, path: String, node: &Value) -> Option<Self> {
        let folder = node.as_object()?;

        let files = folder
            .get(FILES_KEY)
            .and_then(Value::as_array)
            .map(|files| {
                files
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let children = folder
            .iter()
            .filter(|(key, value)| key.as_str() != FILES_KEY && value.is_object())
            .filter_map(|(key, value)| Self::from_node(key, format!("{path}/{key}"), value))
            .collect();

        Some(Self {
            name: name.to_string(),
            path,
            files,
            children,
        })
    }

    /// Number of template files in this folder and all of its descendants.
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.files.len() + self.children.iter().map(Self::total_files).sum::<usize>()
    }

    /// Appends one entry per file, this folder first, then each subfolder in order.
    fn collect_metas(&self, out: &mut Vec<TemplateMeta>) {
        out.extend(
            self.files
                .iter()
                .map(|filename| TemplateMeta::new(self.path.clone(), filename.clone())),
        );
        for child in &self.children {
            child.collect_metas(out);
        }
    }
}

/// Builds the folder tree from the `templates` object of a listing.
///
/// Top-level values that are not objects are skipped.
#[must_use]
pub fn build_tree(templates: &Map<String, Value>) -> Vec<TemplateFolder> {
    templates
        .iter()
        .filter_map(|(name, node)| TemplateFolder::from_node(name, name.clone(), node))
        .collect()
}

/// Flattens the `templates` object of a listing into a lookup list.
#[must_use]
pub fn flatten_listing(templates: &Map<String, Value>) -> Vec<TemplateMeta> {
    let mut metas = Vec::new();
    for folder in build_tree(templates) {
        folder.collect_metas(&mut metas);
    }
    metas
}

/// Finds a catalog entry by file name.
#[must_use]
pub fn find_by_filename<'a>(metas: &'a [TemplateMeta], filename: &str) -> Option<&'a TemplateMeta> {
    metas.iter().find(|meta| meta.filename == filename)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::collections::BTreeMap;

    use proptest::prelude::*;

    fn listing(json: &str) -> TemplateListing {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_single_category() {
        let metas = listing(r#"{"templates":{"Marketing":{"files":["welcome.html"]}}}"#).flatten();
        assert_eq!(
            metas,
            vec![TemplateMeta {
                category: "Marketing".to_string(),
                filename: "welcome.html".to_string(),
                path: "Marketing/welcome.html".to_string(),
            }]
        );
    }

    #[test]
    fn test_nested_categories_extend_path() {
        let metas = listing(
            r#"{"templates":{"Sales":{"files":["a.html"],"Followup":{"files":["b.html"],"Late":{"files":["c.html"]}}}}}"#,
        )
        .flatten();

        let categories: Vec<_> = metas.iter().map(|m| m.category.as_str()).collect();
        assert_eq!(categories, ["Sales", "Sales/Followup", "Sales/Followup/Late"]);
        assert_eq!(metas[2].path, "Sales/Followup/Late/c.html");
    }

    #[test]
    fn test_listing_order_is_kept() {
        let metas = listing(
            r#"{"templates":{"Zeta":{"files":["z2.html","z1.html"]},"Alpha":{"files":["a.html"]}}}"#,
        )
        .flatten();

        let files: Vec<_> = metas.iter().map(|m| m.filename.as_str()).collect();
        assert_eq!(files, ["z2.html", "z1.html", "a.html"]);
    }

    #[test]
    fn test_non_object_values_are_ignored() {
        let metas = listing(
            r#"{"templates":{"Odd":{"files":["x.html", 3],"note":"hello","count":2},"Loose":"text"}}"#,
        )
        .flatten();

        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].filename, "x.html");
    }

    #[test]
    fn test_missing_templates_key_is_empty() {
        assert!(listing("{}").flatten().is_empty());
    }

    #[test]
    fn test_tree_counts_whole_subtree() {
        let tree = listing(
            r#"{"templates":{"Sales":{"files":["a.html"],"Followup":{"files":["b.html"],"Late":{"files":["c.html","d.html"]}}}}}"#,
        )
        .tree();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].total_files(), 4);
        assert_eq!(tree[0].children[0].path, "Sales/Followup");
        assert_eq!(tree[0].children[0].total_files(), 3);
    }

    #[test]
    fn test_find_by_filename() {
        let metas = vec![
            TemplateMeta::new("A", "one.html"),
            TemplateMeta::new("B", "two.html"),
        ];
        assert_eq!(find_by_filename(&metas, "two.html").unwrap().category, "B");
        assert!(find_by_filename(&metas, "three.html").is_none());
    }

    #[derive(Debug, Clone)]
    struct Node {
        files: Vec<String>,
        children: BTreeMap<String, Node>,
    }

    impl Node {
        fn to_value(&self) -> Value {
            let mut object = Map::new();
            object.insert(
                FILES_KEY.to_string(),
                Value::Array(self.files.iter().cloned().map(Value::String).collect()),
            );
            for (name, child) in &self.children {
                object.insert(name.clone(), child.to_value());
            }
            Value::Object(object)
        }

        fn visit(&self, path: &str, f: &mut impl FnMut(&str, &Self)) {
            f(path, self);
            for (name, child) in &self.children {
                child.visit(&format!("{path}/{name}"), f);
            }
        }

        fn subtree_files(&self) -> usize {
            self.files.len() + self.children.values().map(Self::subtree_files).sum::<usize>()
        }
    }

    fn node_strategy() -> impl Strategy<Value = Node> {
        let files = prop::collection::vec("[a-z]{1,8}\\.html", 0..4);
        files
            .clone()
            .prop_map(|files| Node {
                files,
                children: BTreeMap::new(),
            })
            .prop_recursive(3, 24, 4, move |inner| {
                (
                    files.clone(),
                    prop::collection::btree_map("dir_[a-z]{1,4}", inner, 0..4),
                )
                    .prop_map(|(files, children)| Node { files, children })
            })
    }

    proptest! {
        #[test]
        fn prop_flatten_count_matches_subtree(
            roots in prop::collection::btree_map("top_[a-z]{1,4}", node_strategy(), 0..4)
        ) {
            let mut templates = Map::new();
            for (name, node) in &roots {
                templates.insert(name.clone(), node.to_value());
            }
            let metas = flatten_listing(&templates);

            for (name, root) in &roots {
                root.visit(name, &mut |path, node| {
                    let prefix = format!("{path}/");
                    let counted = metas
                        .iter()
                        .filter(|m| m.category == path || m.category.starts_with(&prefix))
                        .count();
                    assert_eq!(counted, node.subtree_files(), "category {path}");
                });
            }

            let total: usize = roots.values().map(Node::subtree_files).sum();
            prop_assert_eq!(metas.len(), total);
        }
    }
}
