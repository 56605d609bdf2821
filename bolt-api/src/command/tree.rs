//! Command trees: nested literals and arguments with executors at the leaves.

use std::sync::Arc;

use super::CommandExecutor;
use super::args::ArgumentConsumer;

pub struct CommandTree {
    pub names: Vec<String>,
    pub description: String,
    pub(crate) children: Vec<Node>,
    pub(crate) executor: Option<Arc<dyn CommandExecutor>>,
}

impl CommandTree {
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>, description: &str) -> Self {
        Self {
            names: names.into_iter().map(str::to_string).collect(),
            description: description.to_string(),
            children: Vec::new(),
            executor: None,
        }
    }

    #[must_use]
    pub fn then(mut self, child: builder::NodeBuilder) -> Self {
        self.children.push(child.into_node());
        self
    }

    /// Executor for the bare command with no further tokens.
    #[must_use]
    pub fn execute(mut self, executor: impl CommandExecutor + 'static) -> Self {
        self.executor = Some(Arc::new(executor));
        self
    }
}

pub(crate) enum NodeKind {
    Literal(String),
    Argument {
        name: String,
        consumer: Arc<dyn ArgumentConsumer>,
    },
}

pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) children: Vec<Node>,
    pub(crate) executor: Option<Arc<dyn CommandExecutor>>,
}

pub mod builder {
    use std::sync::Arc;

    use super::super::CommandExecutor;
    use super::super::args::ArgumentConsumer;
    use super::{Node, NodeKind};

    pub struct NodeBuilder {
        node: Node,
    }

    impl NodeBuilder {
        #[must_use]
        pub fn then(mut self, child: NodeBuilder) -> Self {
            self.node.children.push(child.into_node());
            self
        }

        #[must_use]
        pub fn execute(mut self, executor: impl CommandExecutor + 'static) -> Self {
            self.node.executor = Some(Arc::new(executor));
            self
        }

        pub(crate) fn into_node(self) -> Node {
            self.node
        }
    }

    /// A node matched by an exact keyword.
    pub fn literal(keyword: &str) -> NodeBuilder {
        NodeBuilder {
            node: Node {
                kind: NodeKind::Literal(keyword.to_string()),
                children: Vec::new(),
                executor: None,
            },
        }
    }

    /// A node that consumes one token through `consumer`.
    pub fn argument(name: &str, consumer: impl ArgumentConsumer + 'static) -> NodeBuilder {
        NodeBuilder {
            node: Node {
                kind: NodeKind::Argument {
                    name: name.to_string(),
                    consumer: Arc::new(consumer),
                },
                children: Vec::new(),
                executor: None,
            },
        }
    }
}
