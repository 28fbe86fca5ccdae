mod arena;
mod node;
mod node_id;
mod raw_bst_tree;

pub(crate) use node_id::NodeId;
pub(crate) use raw_bst_tree::RawBstTree;
