//! Drawing layers
//!
//! One enumeration identifies every layer a graphical item can be placed
//! on. Which subset is actually usable depends on the container: boards
//! enable inner copper according to their stackup, footprints never carry
//! inner copper graphics at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies the design layer a graphical item lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    FrontCopper,
    Inner1Copper,
    Inner2Copper,
    Inner3Copper,
    Inner4Copper,
    BackCopper,
    FrontSilkscreen,
    BackSilkscreen,
    FrontMask,
    BackMask,
    FrontFabrication,
    BackFabrication,
    FrontCourtyard,
    BackCourtyard,
    BoardOutline,
    UserDrawings,
    UserComments,
}

impl Layer {
    /// Every defined layer, in stackup order.
    pub const ALL: [Layer; 17] = [
        Layer::FrontCopper,
        Layer::Inner1Copper,
        Layer::Inner2Copper,
        Layer::Inner3Copper,
        Layer::Inner4Copper,
        Layer::BackCopper,
        Layer::FrontSilkscreen,
        Layer::BackSilkscreen,
        Layer::FrontMask,
        Layer::BackMask,
        Layer::FrontFabrication,
        Layer::BackFabrication,
        Layer::FrontCourtyard,
        Layer::BackCourtyard,
        Layer::BoardOutline,
        Layer::UserDrawings,
        Layer::UserComments,
    ];

    pub fn is_copper(self) -> bool {
        matches!(
            self,
            Layer::FrontCopper
                | Layer::BackCopper
                | Layer::Inner1Copper
                | Layer::Inner2Copper
                | Layer::Inner3Copper
                | Layer::Inner4Copper
        )
    }

    /// 1-based stackup position of an inner copper layer, `None` for all
    /// other layers.
    pub fn inner_copper_index(self) -> Option<u8> {
        match self {
            Layer::Inner1Copper => Some(1),
            Layer::Inner2Copper => Some(2),
            Layer::Inner3Copper => Some(3),
            Layer::Inner4Copper => Some(4),
            _ => None,
        }
    }

    /// Whether a board with `copper_layers` copper layers carries this
    /// layer. Inner copper layer N exists once the stackup has N + 2
    /// copper layers; every non-inner layer always exists.
    pub fn enabled_with_copper_count(self, copper_layers: u8) -> bool {
        match self.inner_copper_index() {
            Some(index) => index + 2 <= copper_layers,
            None => true,
        }
    }

    /// Footprint graphics may use any layer except inner copper.
    pub fn allowed_in_footprint(self) -> bool {
        self.inner_copper_index().is_none()
    }
}

impl Default for Layer {
    fn default() -> Self {
        Layer::UserDrawings
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layer::FrontCopper => "F.Cu",
            Layer::Inner1Copper => "In1.Cu",
            Layer::Inner2Copper => "In2.Cu",
            Layer::Inner3Copper => "In3.Cu",
            Layer::Inner4Copper => "In4.Cu",
            Layer::BackCopper => "B.Cu",
            Layer::FrontSilkscreen => "F.Silk",
            Layer::BackSilkscreen => "B.Silk",
            Layer::FrontMask => "F.Mask",
            Layer::BackMask => "B.Mask",
            Layer::FrontFabrication => "F.Fab",
            Layer::BackFabrication => "B.Fab",
            Layer::FrontCourtyard => "F.CrtYd",
            Layer::BackCourtyard => "B.CrtYd",
            Layer::BoardOutline => "Edge.Cuts",
            Layer::UserDrawings => "Dwgs.User",
            Layer::UserComments => "Cmts.User",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Layer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layer::ALL
            .iter()
            .copied()
            .find(|layer| layer.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown layer: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_copper_enablement() {
        assert!(!Layer::Inner1Copper.enabled_with_copper_count(2));
        assert!(Layer::Inner1Copper.enabled_with_copper_count(4));
        assert!(Layer::Inner2Copper.enabled_with_copper_count(4));
        assert!(!Layer::Inner3Copper.enabled_with_copper_count(4));
        assert!(Layer::Inner4Copper.enabled_with_copper_count(6));
    }

    #[test]
    fn test_outer_layers_always_enabled() {
        assert!(Layer::FrontCopper.enabled_with_copper_count(2));
        assert!(Layer::BackCopper.enabled_with_copper_count(2));
        assert!(Layer::BoardOutline.enabled_with_copper_count(2));
        assert!(Layer::UserDrawings.enabled_with_copper_count(2));
    }

    #[test]
    fn test_footprint_layer_rules() {
        assert!(Layer::FrontSilkscreen.allowed_in_footprint());
        assert!(Layer::FrontCopper.allowed_in_footprint());
        assert!(!Layer::Inner1Copper.allowed_in_footprint());
        assert!(!Layer::Inner4Copper.allowed_in_footprint());
    }

    #[test]
    fn test_display_round_trip() {
        for layer in Layer::ALL {
            let parsed: Layer = layer.to_string().parse().unwrap();
            assert_eq!(parsed, layer);
        }
        assert!("Nonsense.Layer".parse::<Layer>().is_err());
    }
}
