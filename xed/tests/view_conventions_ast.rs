use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

#[test]
fn given_widget_views_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");

    let mut violations: Vec<String> = Vec::new();
    let mut checked = 0usize;

    for widget_dir in sorted_dir_entries(&widgets_dir) {
        if !widget_dir.is_dir() {
            continue;
        }

        let view_dir = widget_dir.join("view");
        if !view_dir.is_dir() {
            violations.push(format!(
                "{}: widget is missing its view/ directory",
                widget_dir.display()
            ));
            continue;
        }

        for module in validate_view_mod(&view_dir, &mut violations) {
            let file_path = view_dir.join(format!("{module}.rs"));
            validate_view_file(&file_path, &mut violations);
            checked += 1;
        }
    }

    assert!(checked > 0, "no view modules found");
    assert!(
        violations.is_empty(),
        "view convention violations:\n{}",
        violations.join("\n")
    );
}

/// Check that view/mod.rs declares exactly the files present on disk.
fn validate_view_mod(
    view_dir: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let mod_rs = view_dir.join("mod.rs");
    let file = parse(&mod_rs).1;

    let mut declared_modules = BTreeSet::new();
    for item in &file.items {
        match item {
            Item::Mod(item_mod) => {
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none()
                {
                    declared_modules.insert(item_mod.ident.to_string());
                } else {
                    violations.push(format!(
                        "{}: module declaration '{}' must be pub(crate) mod <name>;",
                        mod_rs.display(),
                        item_mod.ident
                    ));
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    let mut fs_modules = BTreeSet::new();
    for path in sorted_dir_entries(view_dir) {
        if path.is_dir() {
            violations.push(format!(
                "{}: nested view directories are forbidden",
                path.display()
            ));
            continue;
        }
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        let stem = file_stem(&path);
        if stem != "mod" {
            fs_modules.insert(stem);
        }
    }

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match file modules {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    declared_modules
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let (source, file) = parse(file_path);
    let expected_prefix = snake_to_pascal_case(&file_stem(file_path));

    for forbidden in ["crate::app::", "crate::state::", "crate::routers::"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: views must not depend on {forbidden}",
                file_path.display()
            ));
        }
    }

    for forbidden in ["log::", "std::fs::", "Task::", "iced::Task"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }

    for name in props_names {
        if name != format!("{expected_prefix}Props") {
            violations.push(format!(
                "{}: props type '{name}' must be named '{expected_prefix}Props'",
                file_path.display()
            ));
        }
    }
}

fn parse(path: &Path) -> (String, syn::File) {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    });
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    });
    (source, file)
}

fn sorted_dir_entries(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    let mut paths: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| {
                    panic!("failed to read dir entry: {err}")
                })
                .path()
        })
        .collect();
    paths.sort();
    paths
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string()
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
