use std::fmt;

/// Data types supported by the AST Model. The primitive types are the three
/// keywords of the language, struct types are identified by their declared name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum DataType {
    INT,
    BOOL,
    VOID,
    STRUCT(String),
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::INT => write!(f, "int"),
            DataType::BOOL => write!(f, "bool"),
            DataType::VOID => write!(f, "void"),
            DataType::STRUCT(name) => write!(f, "{}", name),
        }
    }
}
