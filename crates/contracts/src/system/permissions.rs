//! Static permission tree of the console.
//!
//! Node ids are the identifiers stored in role records on the backend;
//! labels are display names for the role editor. Enforcement happens
//! server-side, the tree is vocabulary only.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionNode {
    pub id: &'static str,
    pub label: &'static str,
    pub children: &'static [PermissionNode],
}

const fn leaf(id: &'static str, label: &'static str) -> PermissionNode {
    PermissionNode {
        id,
        label,
        children: &[],
    }
}

pub static PERMISSION_TREE: &[PermissionNode] = &[
    PermissionNode {
        id: "system",
        label: "System administration",
        children: &[
            PermissionNode {
                id: "dept",
                label: "Store management",
                children: &[
                    leaf("dept:list", "View list"),
                    leaf("dept:add", "Create store"),
                    leaf("dept:edit", "Edit store"),
                    leaf("dept:delete", "Delete store"),
                    leaf("dept:status", "Enable / disable"),
                ],
            },
            PermissionNode {
                id: "role",
                label: "Role management",
                children: &[
                    leaf("role:list", "View list"),
                    leaf("role:add", "Create role"),
                    leaf("role:edit", "Edit role"),
                    leaf("role:delete", "Delete role"),
                ],
            },
            PermissionNode {
                id: "user",
                label: "User management",
                children: &[
                    leaf("user:list", "View list"),
                    leaf("user:add", "Create user"),
                    leaf("user:edit", "Edit user"),
                    leaf("user:delete", "Delete user"),
                    leaf("user:status", "Enable / disable"),
                ],
            },
        ],
    },
    PermissionNode {
        id: "product",
        label: "Product catalog",
        children: &[
            leaf("product:list", "View list"),
            leaf("product:add", "Create product"),
            leaf("product:edit", "Edit product"),
            leaf("product:delete", "Delete product"),
            leaf("product:status", "Enable / disable"),
        ],
    },
    PermissionNode {
        id: "customer",
        label: "Customer management",
        children: &[
            leaf("customer:list", "View list"),
            leaf("customer:add", "Create customer"),
            leaf("customer:edit", "Edit / details"),
            leaf("customer:transfer", "Batch transfer"),
            leaf("customer:import", "Import customers"),
            leaf("customer:follow", "Write follow-up"),
            leaf("customer:order", "Record order"),
        ],
    },
    PermissionNode {
        id: "allocation",
        label: "Lead allocation",
        children: &[
            leaf("allocation:list", "View rules"),
            leaf("allocation:add", "Create rule"),
            leaf("allocation:edit", "Edit rule"),
            leaf("allocation:delete", "Delete rule"),
        ],
    },
];

/// Depth-first lookup of a node by id.
pub fn find(id: &str) -> Option<&'static PermissionNode> {
    fn walk(nodes: &'static [PermissionNode], id: &str) -> Option<&'static PermissionNode> {
        for node in nodes {
            if node.id == id {
                return Some(node);
            }
            if let Some(found) = walk(node.children, id) {
                return Some(found);
            }
        }
        None
    }
    walk(PERMISSION_TREE, id)
}

/// All node ids (branches and leaves) in depth-first order.
pub fn flatten_ids() -> Vec<&'static str> {
    fn walk(nodes: &'static [PermissionNode], out: &mut Vec<&'static str>) {
        for node in nodes {
            out.push(node.id);
            walk(node.children, out);
        }
    }
    let mut out = Vec::new();
    walk(PERMISSION_TREE, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids = flatten_ids();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn tree_covers_every_console_module() {
        assert_eq!(flatten_ids().len(), 37);
        for root in ["system", "product", "customer", "allocation"] {
            assert!(find(root).is_some(), "missing root {root}");
        }
    }

    #[test]
    fn find_resolves_nested_leaves() {
        let node = find("customer:follow").unwrap();
        assert_eq!(node.label, "Write follow-up");
        assert!(node.children.is_empty());
        assert!(find("dept:status").is_some());
        assert!(find("nonexistent:perm").is_none());
    }
}
