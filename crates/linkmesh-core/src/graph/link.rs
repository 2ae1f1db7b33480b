use crate::graph::handle::{LinkHandle, NodeHandle};

/// Weight of a single link
pub type Metric = i32;

/// Accumulated weight of a path
pub type Cost = i64;

/// An outgoing link as stored inside its source node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    serial: u32,
    metric: Metric,
    next: NodeHandle,
}

impl LinkRecord {
    pub(crate) fn new(serial: u32, next: NodeHandle, metric: Metric) -> Self {
        Self {
            serial,
            metric,
            next,
        }
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Node this link points at
    pub fn destination(&self) -> NodeHandle {
        self.next
    }

    /// Handle for this link given the node that owns it
    pub fn handle(&self, source: NodeHandle) -> LinkHandle {
        LinkHandle::new(source, self.serial)
    }

    pub(crate) fn view(&self, source: NodeHandle) -> Link {
        Link {
            handle: self.handle(source),
            destination: self.next,
            metric: self.metric,
        }
    }
}

/// Read-only view of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    handle: LinkHandle,
    destination: NodeHandle,
    metric: Metric,
}

impl Link {
    pub fn handle(&self) -> LinkHandle {
        self.handle
    }

    pub fn source(&self) -> NodeHandle {
        self.handle.source()
    }

    pub fn destination(&self) -> NodeHandle {
        self.destination
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }
}
