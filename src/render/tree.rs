//! Tree renderers

use super::{leaf_label, RenderOptions, TreeStyle};
use crate::proofs::merkle::MerkleTree;

/// Render `tree` in the requested style
pub fn render_tree<L: AsRef<[u8]>>(
    tree: &MerkleTree,
    leaves: &[L],
    style: TreeStyle,
    options: &RenderOptions,
) -> String {
    match style {
        TreeStyle::Levels => render_levels(tree, leaves, options),
        TreeStyle::Connections => render_connections(tree, leaves, options),
        TreeStyle::Folder => render_folder(tree, leaves, options),
    }
}

/// List every level from the leaves up, followed by the full root
pub fn render_levels<L: AsRef<[u8]>>(
    tree: &MerkleTree,
    leaves: &[L],
    options: &RenderOptions,
) -> String {
    let mut output = String::new();

    for (level_index, level) in tree.levels().iter().enumerate() {
        output.push_str(&format!("Level {}:\n", level_index));
        for (i, digest) in level.iter().enumerate() {
            let short = digest.short(options.short_hash_len);
            if level_index == 0 {
                output.push_str(&format!("  [{}] {} -> {}\n", i, leaf_label(leaves, i), short));
            } else {
                output.push_str(&format!("  [{}] {}\n", i, short));
            }
        }
        output.push('\n');
    }

    output.push_str(&format!("Root: {}\n", tree.root()));
    output
}

/// List nodes from the root down, each with its left and right child
pub fn render_connections<L: AsRef<[u8]>>(
    tree: &MerkleTree,
    leaves: &[L],
    options: &RenderOptions,
) -> String {
    let levels = tree.levels();
    let top = tree.height();
    let mut output = String::new();

    for level_index in (0..levels.len()).rev() {
        if level_index == top {
            output.push_str(&format!("ROOT (Level {}):\n", level_index));
        } else if level_index == 0 {
            output.push_str(&format!("LEAVES (Level {}):\n", level_index));
        } else {
            output.push_str(&format!("Level {}:\n", level_index));
        }

        for (i, digest) in levels[level_index].iter().enumerate() {
            let short = digest.short(options.short_hash_len);
            if level_index == 0 {
                output.push_str(&format!("  Node[{}]: {} -> {}\n", i, leaf_label(leaves, i), short));
                continue;
            }

            output.push_str(&format!("  Node[{}]: {}\n", i, short));
            let children = &levels[level_index - 1];
            let left_index = i * 2;
            let right_index = left_index + 1;
            let left = children[left_index].short(options.short_hash_len);
            let right = match children.get(right_index) {
                Some(digest) => digest.short(options.short_hash_len),
                None => format!("{} (duplicated)", left),
            };
            output.push_str(&format!("    ├── Left Child[{}]: {}\n", left_index, left));
            output.push_str(&format!("    └── Right Child[{}]: {}\n", right_index, right));
        }

        if level_index > 0 {
            output.push_str("    |\n    v\n");
        }
    }

    output
}

/// Nested outline starting at the root
pub fn render_folder<L: AsRef<[u8]>>(
    tree: &MerkleTree,
    leaves: &[L],
    options: &RenderOptions,
) -> String {
    let mut output = format!("Merkle Root: {}\n", tree.root().short(options.short_hash_len));
    if tree.height() > 0 {
        folder_children(tree, leaves, options, tree.height(), 0, "", &mut output);
    } else {
        // A lone leaf is the root itself.
        output.push_str(&format!("└── {}\n", leaf_label(leaves, 0)));
    }
    output
}

fn folder_children<L: AsRef<[u8]>>(
    tree: &MerkleTree,
    leaves: &[L],
    options: &RenderOptions,
    level: usize,
    node_index: usize,
    prefix: &str,
    output: &mut String,
) {
    let child_level = level - 1;
    let children = &tree.levels()[child_level];
    let left_index = node_index * 2;
    let right_index = left_index + 1;

    let node_label = |index: usize| -> String {
        if child_level == 0 {
            leaf_label(leaves, index)
        } else {
            format!("Node[{}]", index)
        }
    };

    let left_short = children[left_index].short(options.short_hash_len);
    output.push_str(&format!("{}├── {} ({})\n", prefix, node_label(left_index), left_short));
    if child_level > 0 {
        let nested = format!("{}│   ", prefix);
        folder_children(tree, leaves, options, child_level, left_index, &nested, output);
    }

    match children.get(right_index) {
        Some(right) => {
            let right_short = right.short(options.short_hash_len);
            output.push_str(&format!("{}└── {} ({})\n", prefix, node_label(right_index), right_short));
            if child_level > 0 {
                let nested = format!("{}    ", prefix);
                folder_children(tree, leaves, options, child_level, right_index, &nested, output);
            }
        }
        None => {
            output.push_str(&format!(
                "{}└── {} (duplicated) ({})\n",
                prefix,
                node_label(left_index),
                left_short
            ));
        }
    }
}
