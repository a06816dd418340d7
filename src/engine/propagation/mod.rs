//! The consistency engine. Node consistency removes candidates whose length
//! does not fit their slot; arc consistency removes candidates without
//! support in a crossing slot's domain, propagated over a worklist until the
//! fixed point is reached. Both passes run before search and are the only
//! code that shrinks the [`DomainStore`](crate::DomainStore).

pub(crate) mod arc_consistency;
pub(crate) mod node_consistency;
