//! Underlying basic representations of enum-style Go types.

/// The basic Go kind a named constant type resolves to.
///
/// `byte` and `rune` are canonicalized to their underlying kinds, the way a
/// type checker reports them. `Int`/`Uint`/`Uintptr` are the platform-width
/// kinds and carry no fixed bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repr {
    Bool,
    String,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
}

impl Repr {
    /// Resolve a predeclared Go type name to its basic kind.
    pub fn from_basic_name(name: &str) -> Option<Repr> {
        Some(match name {
            "bool" => Repr::Bool,
            "string" => Repr::String,
            "int" => Repr::Int,
            "int8" => Repr::Int8,
            "int16" => Repr::Int16,
            "int32" | "rune" => Repr::Int32,
            "int64" => Repr::Int64,
            "uint" => Repr::Uint,
            "uint8" | "byte" => Repr::Uint8,
            "uint16" => Repr::Uint16,
            "uint32" => Repr::Uint32,
            "uint64" => Repr::Uint64,
            "uintptr" => Repr::Uintptr,
            _ => return None,
        })
    }

    /// The canonical Go spelling, used as the map key type and accessor
    /// parameter type in generated source.
    pub fn go_name(self) -> &'static str {
        match self {
            Repr::Bool => "bool",
            Repr::String => "string",
            Repr::Int => "int",
            Repr::Int8 => "int8",
            Repr::Int16 => "int16",
            Repr::Int32 => "int32",
            Repr::Int64 => "int64",
            Repr::Uint => "uint",
            Repr::Uint8 => "uint8",
            Repr::Uint16 => "uint16",
            Repr::Uint32 => "uint32",
            Repr::Uint64 => "uint64",
            Repr::Uintptr => "uintptr",
        }
    }

    /// `Some(true)` for signed integers, `Some(false)` for unsigned,
    /// `None` for non-integer kinds.
    pub fn is_signed(self) -> Option<bool> {
        match self {
            Repr::Int | Repr::Int8 | Repr::Int16 | Repr::Int32 | Repr::Int64 => Some(true),
            Repr::Uint
            | Repr::Uint8
            | Repr::Uint16
            | Repr::Uint32
            | Repr::Uint64
            | Repr::Uintptr => Some(false),
            Repr::Bool | Repr::String => None,
        }
    }

    /// Fixed bit width, or `None` for platform-width and non-integer kinds.
    pub fn bit_width(self) -> Option<u32> {
        match self {
            Repr::Int8 | Repr::Uint8 => Some(8),
            Repr::Int16 | Repr::Uint16 => Some(16),
            Repr::Int32 | Repr::Uint32 => Some(32),
            Repr::Int64 | Repr::Uint64 => Some(64),
            _ => None,
        }
    }
}
