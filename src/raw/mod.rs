mod arena;
mod handle;
mod node;
mod raw_avl_map;

pub(crate) use handle::NodeId;
pub(crate) use raw_avl_map::RawAvlMap;
