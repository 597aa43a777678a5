use std::fmt;

use strum::Display;

/// Column types accepted in a `CREATE TABLE` statement, rendered as their
/// uppercase SQL keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ColumnType {
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
    Decimal,
    Float,
    Double,
    Real,
    Bit,
    Boolean,
    Serial,
    Date,
    DateTime,
    Timestamp,
    Time,
    Year,
    Char,
    VarChar,
    TinyText,
    Text,
    MediumText,
    LongText,
    Binary,
    VarBinary,
    TinyBlob,
    MediumBlob,
    Blob,
    LongBlob,
    Enum,
    Set,
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Json,
}

/// A column type with an optional length, e.g. `VARCHAR(255)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataType {
    pub column_type: ColumnType,
    pub length: Option<u32>,
}

impl DataType {
    pub fn new(column_type: ColumnType) -> Self {
        Self {
            column_type,
            length: None,
        }
    }

    pub fn with_length(column_type: ColumnType, length: u32) -> Self {
        Self {
            column_type,
            length: Some(length),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.length {
            Some(length) => write!(f, "{}({})", self.column_type, length),
            None => write!(f, "{}", self.column_type),
        }
    }
}

/// Column constraints accepted by the table builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    NotNull,
    AutoIncrement,
    Unique,
    Default(String),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::NotNull => write!(f, "NOT NULL"),
            Constraint::AutoIncrement => write!(f, "AUTO_INCREMENT"),
            Constraint::Unique => write!(f, "UNIQUE"),
            Constraint::Default(value) => write!(f, "DEFAULT {}", value),
        }
    }
}

/// A column descriptor for `create_table`: name, type, constraints, and
/// whether the column is the table's primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
    pub constraints: Vec<Constraint>,
    pub primary: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            constraints: Vec::new(),
            primary: false,
        }
    }

    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }
}
