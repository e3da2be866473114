//! Component-level tokens. Sizes are in spacing grid units, so they follow
//! whatever grid size the theme's spacing uses.

use serde::Serialize;

/// Control heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HeightTokens {
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PanelTokens {
    pub padding: u16,
    pub header_height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InputTokens {
    pub padding: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MenuTokens {
    pub item_height: u16,
}

/// The resolved component tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ComponentTokens {
    pub height: HeightTokens,
    pub panel: PanelTokens,
    pub input: InputTokens,
    pub menu: MenuTokens,
}

/// The fixed component token set.
#[must_use]
pub const fn create_components() -> ComponentTokens {
    ComponentTokens {
        height: HeightTokens { sm: 3, md: 4, lg: 6 },
        panel: PanelTokens {
            padding: 1,
            header_height: 4,
        },
        input: InputTokens { padding: 1 },
        menu: MenuTokens { item_height: 4 },
    }
}
