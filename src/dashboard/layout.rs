// Fixed tree of named screen regions; only leaf contents change after startup

use super::format::Panel;
use super::{LayoutVariant, PanelKind};
use crate::error::DashboardError;

/// Rows the header region occupies, border included.
pub const HEADER_ROWS: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDirection {
    /// Children stacked top to bottom.
    Column,
    /// Children side by side.
    Row,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Single centered line on a colored bar.
    Banner(String),
    Panel(Panel),
}

#[derive(Debug, Clone)]
enum RegionKind {
    Leaf(Option<Content>),
    Split {
        direction: SplitDirection,
        children: Vec<Region>,
    },
}

#[derive(Debug, Clone)]
pub struct Region {
    name: &'static str,
    size: Option<u16>,
    kind: RegionKind,
}

impl Region {
    pub fn leaf(name: &'static str) -> Self {
        Self {
            name,
            size: None,
            kind: RegionKind::Leaf(None),
        }
    }

    pub fn split(name: &'static str, direction: SplitDirection, children: Vec<Region>) -> Self {
        Self {
            name,
            size: None,
            kind: RegionKind::Split {
                direction,
                children,
            },
        }
    }

    /// Fix the region's extent along its parent's split direction.
    pub fn with_size(mut self, size: u16) -> Self {
        self.size = Some(size);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> Option<u16> {
        self.size
    }

    pub fn direction(&self) -> Option<SplitDirection> {
        match &self.kind {
            RegionKind::Split { direction, .. } => Some(*direction),
            RegionKind::Leaf(_) => None,
        }
    }

    pub fn children(&self) -> &[Region] {
        match &self.kind {
            RegionKind::Split { children, .. } => children,
            RegionKind::Leaf(_) => &[],
        }
    }

    pub fn content(&self) -> Option<&Content> {
        match &self.kind {
            RegionKind::Leaf(content) => content.as_ref(),
            RegionKind::Split { .. } => None,
        }
    }

    fn find_leaf_mut(&mut self, name: &str) -> Option<&mut Option<Content>> {
        let is_target = self.name == name;
        match &mut self.kind {
            RegionKind::Leaf(content) if is_target => Some(content),
            RegionKind::Leaf(_) => None,
            RegionKind::Split { children, .. } => {
                children.iter_mut().find_map(|c| c.find_leaf_mut(name))
            }
        }
    }

    fn find(&self, name: &str) -> Option<&Region> {
        if self.name == name {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(name))
    }

    fn collect_names(&self, out: &mut Vec<&'static str>) {
        out.push(self.name);
        for child in self.children() {
            child.collect_names(out);
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardLayout {
    root: Region,
}

impl DashboardLayout {
    /// Header on top, panels below: a 2x2 grid for `Full`, a single row for `Compact`.
    pub fn for_variant(variant: LayoutVariant) -> Self {
        let header = Region::leaf("header").with_size(HEADER_ROWS);
        let body = match variant {
            LayoutVariant::Full => Region::split(
                "body",
                SplitDirection::Row,
                vec![
                    Region::split(
                        "left_col",
                        SplitDirection::Column,
                        vec![
                            Region::leaf(PanelKind::Cpu.region()),
                            Region::leaf(PanelKind::Memory.region()),
                        ],
                    ),
                    Region::split(
                        "right_col",
                        SplitDirection::Column,
                        vec![
                            Region::leaf(PanelKind::Disk.region()),
                            Region::leaf(PanelKind::Network.region()),
                        ],
                    ),
                ],
            ),
            LayoutVariant::Compact => Region::split(
                "body",
                SplitDirection::Row,
                variant
                    .panels()
                    .iter()
                    .map(|kind| Region::leaf(kind.region()))
                    .collect(),
            ),
        };
        Self {
            root: Region::split("root", SplitDirection::Column, vec![header, body]),
        }
    }

    pub fn root(&self) -> &Region {
        &self.root
    }

    /// Every region name, depth first. Constant for the life of the layout.
    pub fn region_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        self.root.collect_names(&mut names);
        names
    }

    /// Replace the content of the named leaf region.
    pub fn update(&mut self, name: &str, content: Content) -> Result<(), DashboardError> {
        let slot = self
            .root
            .find_leaf_mut(name)
            .ok_or_else(|| DashboardError::UnknownRegion(name.to_string()))?;
        *slot = Some(content);
        Ok(())
    }

    pub fn content(&self, name: &str) -> Option<&Content> {
        self.root.find(name).and_then(Region::content)
    }

    pub fn panel(&self, name: &str) -> Option<&Panel> {
        match self.content(name)? {
            Content::Panel(panel) => Some(panel),
            Content::Banner(_) => None,
        }
    }
}
