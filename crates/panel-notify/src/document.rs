//! Flash-source model for server-rendered pages
//!
//! Discovery does not parse HTML; the view layer registers the elements it
//! renders (flash containers and alert-like boxes) and discovery walks them
//! the way the selector list would.

/// One discoverable element: class list, visible text, and the processed /
/// hidden markers discovery relies on for idempotency.
#[derive(Debug, Clone)]
pub struct FlashElement {
    pub classes: Vec<String>,
    pub text: String,
    children: Vec<FlashElement>,
    processed: bool,
    hidden: bool,
}

impl FlashElement {
    pub fn new<S: Into<String>>(classes: &[&str], text: S) -> Self {
        Self {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            text: text.into(),
            children: Vec::new(),
            processed: false,
            hidden: false,
        }
    }

    /// Container element holding message children
    pub fn container(classes: &[&str], children: Vec<FlashElement>) -> Self {
        Self {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            text: String::new(),
            children,
            processed: false,
            hidden: false,
        }
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|class| class == name)
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn children(&self) -> &[FlashElement] {
        &self.children
    }
}

/// Position of an element inside a document: a root, or a child of one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ElementRef {
    pub root: usize,
    pub child: Option<usize>,
}

/// The set of flash sources one rendered page exposes
#[derive(Debug, Default, Clone)]
pub struct FlashDocument {
    roots: Vec<FlashElement>,
}

impl FlashDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: FlashElement) {
        self.roots.push(element);
    }

    pub fn roots(&self) -> &[FlashElement] {
        &self.roots
    }

    /// Candidate elements in selector-priority order:
    /// explicit `flash-item` markers first, then children of a
    /// `flash-messages` container, then generic alert-like elements.
    /// Each element appears at most once, at its highest priority.
    pub(crate) fn candidates(&self) -> Vec<ElementRef> {
        fn push_unique(refs: &mut Vec<ElementRef>, r: ElementRef) {
            if !refs.contains(&r) {
                refs.push(r);
            }
        }

        let mut refs: Vec<ElementRef> = Vec::new();

        // 1. explicit flash-item markers, wherever they sit
        for (root, element) in self.roots.iter().enumerate() {
            if element.has_class("flash-item") {
                push_unique(&mut refs, ElementRef { root, child: None });
            }
            for (child, nested) in element.children.iter().enumerate() {
                if nested.has_class("flash-item") {
                    push_unique(
                        &mut refs,
                        ElementRef {
                            root,
                            child: Some(child),
                        },
                    );
                }
            }
        }

        // 2. children of a flash-messages container
        for (root, element) in self.roots.iter().enumerate() {
            if element.has_class("flash-messages") {
                for child in 0..element.children.len() {
                    push_unique(
                        &mut refs,
                        ElementRef {
                            root,
                            child: Some(child),
                        },
                    );
                }
            }
        }

        // 3. generic alert / message-like containers
        for (root, element) in self.roots.iter().enumerate() {
            let generic = ["alert", "message", "notification"]
                .iter()
                .any(|class| element.has_class(class));
            if generic && element.children.is_empty() {
                push_unique(&mut refs, ElementRef { root, child: None });
            }
        }

        refs
    }

    pub(crate) fn get(&self, r: ElementRef) -> &FlashElement {
        match r.child {
            None => &self.roots[r.root],
            Some(child) => &self.roots[r.root].children[child],
        }
    }

    /// Mark an element processed and hide it; hides the parent container
    /// too once every child is processed.
    pub(crate) fn mark_processed(&mut self, r: ElementRef) {
        match r.child {
            None => {
                let element = &mut self.roots[r.root];
                element.processed = true;
                element.hidden = true;
            }
            Some(child) => {
                let parent = &mut self.roots[r.root];
                parent.children[child].processed = true;
                parent.children[child].hidden = true;
                if parent.children.iter().all(|c| c.processed) {
                    parent.hidden = true;
                }
            }
        }
    }

    /// Classes of the element's parent container, if it has one
    pub(crate) fn container_classes(&self, r: ElementRef) -> &[String] {
        match r.child {
            None => &[],
            Some(_) => &self.roots[r.root].classes,
        }
    }
}
