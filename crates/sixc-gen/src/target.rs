/// Selects which fixed I/O runtime the epilogue appends (spec §6).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Target {
    /// The reference target: `input_routine` reads a single ASCII digit.
    #[default]
    Generic,
    /// `input_routine` polls and accumulates a full decimal number.
    Py65mon,
}

impl Target {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "generic" => Some(Target::Generic),
            "py65mon" => Some(Target::Py65mon),
            _ => None,
        }
    }

    pub fn runtime_text(&self) -> String {
        match self {
            Target::Generic => format!("{}\n{}", crate::runtime::OUTPUT_ROUTINE, crate::runtime::INPUT_ROUTINE_GENERIC),
            Target::Py65mon => format!("{}\n{}", crate::runtime::OUTPUT_ROUTINE, crate::runtime::INPUT_ROUTINE_PY65MON),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Generic => write!(f, "generic"),
            Target::Py65mon => write!(f, "py65mon"),
        }
    }
}
