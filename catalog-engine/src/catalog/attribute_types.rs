//! Attribute type hints
//!
//! Each [`AttributeType`] maps to an icon and the variant payload the
//! admin screens conventionally expect for it. These are rendering
//! hints only: source data legitimately carries `dimensions` on `size`
//! variants, so nothing here rejects a payload.

use shared::models::AttributeType;

/// Variant payload conventionally carried by a given attribute type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// `value` string only
    Plain,
    /// `hexColor` alongside `value`
    HexColor,
    /// Structured `dimensions` payload
    Dimensions,
    /// Structured `weight` payload
    Weight,
}

/// Rendering hints for one attribute type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Icon name the admin UI shows next to the attribute
    pub icon: &'static str,
    /// Payload shape variants of this type are expected to carry
    pub payload: PayloadShape,
}

/// Look up the descriptor for an attribute type
///
/// Total over the enum; unknown wire strings have already been folded
/// into [`AttributeType::Other`] during deserialization.
pub const fn describe(attribute_type: AttributeType) -> TypeDescriptor {
    match attribute_type {
        AttributeType::Color => TypeDescriptor {
            icon: "palette",
            payload: PayloadShape::HexColor,
        },
        AttributeType::Size => TypeDescriptor {
            icon: "ruler",
            payload: PayloadShape::Plain,
        },
        AttributeType::Weight => TypeDescriptor {
            icon: "scale",
            payload: PayloadShape::Weight,
        },
        AttributeType::Material => TypeDescriptor {
            icon: "layers",
            payload: PayloadShape::Plain,
        },
        AttributeType::Dimension => TypeDescriptor {
            icon: "box",
            payload: PayloadShape::Dimensions,
        },
        AttributeType::Capacity => TypeDescriptor {
            icon: "flask",
            payload: PayloadShape::Plain,
        },
        AttributeType::Other => TypeDescriptor {
            icon: "tag",
            payload: PayloadShape::Plain,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_expects_hex_payload() {
        let desc = describe(AttributeType::Color);
        assert_eq!(desc.icon, "palette");
        assert_eq!(desc.payload, PayloadShape::HexColor);
    }

    #[test]
    fn test_structured_payload_types() {
        assert_eq!(describe(AttributeType::Dimension).payload, PayloadShape::Dimensions);
        assert_eq!(describe(AttributeType::Weight).payload, PayloadShape::Weight);
    }

    #[test]
    fn test_unknown_wire_type_describes_as_other() {
        let parsed: AttributeType = serde_json::from_str("\"finish\"").unwrap();
        let desc = describe(parsed);
        assert_eq!(desc.icon, "tag");
        assert_eq!(desc.payload, PayloadShape::Plain);
    }
}
