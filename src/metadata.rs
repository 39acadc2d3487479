//! Normalized entity metadata extracted from raw class descriptors.

use crate::catalog::{ClassDescriptor, FieldDescriptor};
use cruet::case::snake::to_snake_case;
use indexmap::IndexMap;
use log::warn;
use serde::Serialize;

/// Closed set of normalized field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    #[serde(rename = "string")]
    Str,
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "long")]
    Long,
    #[serde(rename = "decimal")]
    Decimal,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "date-time")]
    DateTime,
    #[serde(rename = "byte-array")]
    ByteArray,
    #[serde(rename = "other")]
    Other,
}

impl FieldType {
    /// Maps a declared Java type name onto the normalized set. Package
    /// qualifiers are ignored, `java.lang.Long` and `Long` normalize alike.
    pub fn from_declared(declared: &str) -> Self {
        let simple = declared.rsplit('.').next().unwrap_or(declared).trim();
        match simple {
            "String" | "CharSequence" | "char" | "Character" => Self::Str,
            "int" | "Integer" | "short" | "Short" | "byte" | "Byte" => Self::Integer,
            "long" | "Long" | "BigInteger" => Self::Long,
            "float" | "Float" | "double" | "Double" | "BigDecimal" => Self::Decimal,
            "boolean" | "Boolean" => Self::Boolean,
            "Date" | "Timestamp" | "Instant" | "Calendar" | "LocalDate" | "LocalTime"
            | "LocalDateTime" | "ZonedDateTime" | "OffsetDateTime" => Self::DateTime,
            "byte[]" | "Byte[]" | "Blob" => Self::ByteArray,
            _ => Self::Other,
        }
    }

    /// Inverse of the serialized name, for template filters.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::Str),
            "integer" => Some(Self::Integer),
            "long" => Some(Self::Long),
            "decimal" => Some(Self::Decimal),
            "boolean" => Some(Self::Boolean),
            "date-time" => Some(Self::DateTime),
            "byte-array" => Some(Self::ByteArray),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Java source type the normalized type renders back to.
    pub fn java_type(self) -> &'static str {
        match self {
            Self::Str => "String",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Decimal => "BigDecimal",
            Self::Boolean => "Boolean",
            Self::DateTime => "LocalDateTime",
            Self::ByteArray => "byte[]",
            Self::Other => "Object",
        }
    }
}

/// One declared instance field of an entity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    pub name: String,
    pub declared_type: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub column_name: String,
    pub nullable: bool,
    pub primary_key: bool,
    /// Raw annotation tags of the field, name to params, so templates can
    /// react to dialect annotations beyond the ones interpreted here.
    pub annotations: IndexMap<String, IndexMap<String, String>>,
}

/// Normalized, template-agnostic description of one entity's structure.
///
/// Produced once per source class, immutable, consumed read-only by the
/// renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityInfo {
    pub qualified_name: String,
    pub simple_name: String,
    pub package: String,
    pub table_name: String,
    pub fields: Vec<FieldInfo>,
}

impl EntityInfo {
    /// The field marked as primary key, if the entity declares one.
    pub fn primary_key(&self) -> Option<&FieldInfo> {
        self.fields.iter().find(|field| field.primary_key)
    }
}

/// Capability to interpret one class descriptor into an [`EntityInfo`].
///
/// Implementations encapsulate one annotation dialect; swapping the dialect
/// never touches the renderer.
pub trait EntityParser {
    /// Returns `None` when the descriptor cannot be normalized; the caller
    /// drops the entity and continues with the rest of the batch.
    fn parse(&self, class: &ClassDescriptor) -> Option<EntityInfo>;
}

/// Parser for the JPA annotation dialect (`Entity`, `Table`, `Id`, `Column`,
/// `Transient`).
#[derive(Debug, Default)]
pub struct JpaParser;

const ENTITY: &str = "Entity";
const TABLE: &str = "Table";
const ID: &str = "Id";
const COLUMN: &str = "Column";
const TRANSIENT: &str = "Transient";

impl EntityParser for JpaParser {
    fn parse(&self, class: &ClassDescriptor) -> Option<EntityInfo> {
        if class.annotation(ENTITY).is_none() {
            warn!(
                "class '{}' is not tagged as an entity, dropping it",
                class.qualified_name
            );
            return None;
        }

        let fields: Vec<FieldInfo> = class
            .fields
            .iter()
            .filter(|field| !is_excluded(field))
            .map(parse_field)
            .collect();

        let key_count = fields.iter().filter(|field| field.primary_key).count();
        if key_count == 0 {
            warn!(
                "entity '{}' declares no primary key field, dropping it",
                class.qualified_name
            );
            return None;
        }
        if key_count > 1 {
            warn!(
                "entity '{}' declares a composite primary key, which is not supported, dropping it",
                class.qualified_name
            );
            return None;
        }

        let table_name = class
            .annotation(TABLE)
            .and_then(|annotation| annotation.params.get("name"))
            .cloned()
            .unwrap_or_else(|| to_snake_case(class.simple_name()));

        Some(EntityInfo {
            qualified_name: class.qualified_name.clone(),
            simple_name: class.simple_name().to_string(),
            package: class.package().to_string(),
            table_name,
            fields,
        })
    }
}

fn parse_field(field: &FieldDescriptor) -> FieldInfo {
    let column = field.annotation(COLUMN);
    let column_name = column
        .and_then(|annotation| annotation.params.get("name"))
        .cloned()
        .unwrap_or_else(|| to_snake_case(&field.name));
    let primary_key = field.annotation(ID).is_some();
    let nullable = !primary_key
        && column
            .and_then(|annotation| annotation.params.get("nullable"))
            .map(|value| value != "false")
            .unwrap_or(true);
    let annotations = field
        .annotations
        .iter()
        .map(|annotation| (annotation.name.clone(), annotation.params.clone()))
        .collect();

    FieldInfo {
        name: field.name.clone(),
        declared_type: field.declared_type.clone(),
        field_type: FieldType::from_declared(&field.declared_type),
        column_name,
        nullable,
        primary_key,
        annotations,
    }
}

fn is_excluded(field: &FieldDescriptor) -> bool {
    field.has_modifier("static")
        || field.has_modifier("transient")
        || field.annotation(TRANSIENT).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Annotation;

    fn field(name: &str, declared_type: &str) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            declared_type: declared_type.to_string(),
            modifiers: vec![],
            annotations: vec![],
        }
    }

    fn id_field(name: &str, declared_type: &str) -> FieldDescriptor {
        FieldDescriptor {
            annotations: vec![Annotation::named("Id")],
            ..field(name, declared_type)
        }
    }

    fn user_class() -> ClassDescriptor {
        ClassDescriptor {
            qualified_name: "com.x.model.User".to_string(),
            annotations: vec![Annotation::named("Entity")],
            fields: vec![id_field("id", "Long"), field("name", "String")],
        }
    }

    #[test]
    fn normalizes_declared_types() {
        assert_eq!(FieldType::from_declared("String"), FieldType::Str);
        assert_eq!(FieldType::from_declared("int"), FieldType::Integer);
        assert_eq!(FieldType::from_declared("java.lang.Long"), FieldType::Long);
        assert_eq!(FieldType::from_declared("BigDecimal"), FieldType::Decimal);
        assert_eq!(FieldType::from_declared("boolean"), FieldType::Boolean);
        assert_eq!(FieldType::from_declared("java.time.LocalDateTime"), FieldType::DateTime);
        assert_eq!(FieldType::from_declared("byte[]"), FieldType::ByteArray);
        assert_eq!(FieldType::from_declared("com.x.model.Address"), FieldType::Other);
    }

    #[test]
    fn serialized_names_round_trip_through_from_name() {
        for field_type in [
            FieldType::Str,
            FieldType::Integer,
            FieldType::Long,
            FieldType::Decimal,
            FieldType::Boolean,
            FieldType::DateTime,
            FieldType::ByteArray,
            FieldType::Other,
        ] {
            let name = serde_json::to_value(field_type).unwrap();
            let name = name.as_str().unwrap();
            assert_eq!(FieldType::from_name(name), Some(field_type));
        }
        assert_eq!(FieldType::from_name("varchar"), None);
    }

    #[test]
    fn parses_a_plain_entity() {
        let entity = JpaParser.parse(&user_class()).unwrap();
        assert_eq!(entity.simple_name, "User");
        assert_eq!(entity.package, "com.x.model");
        assert_eq!(entity.table_name, "user");
        assert_eq!(entity.fields.len(), 2);
        assert_eq!(entity.primary_key().unwrap().name, "id");
        assert_eq!(entity.fields[1].field_type, FieldType::Str);
    }

    #[test]
    fn id_field_is_not_nullable() {
        let entity = JpaParser.parse(&user_class()).unwrap();
        assert!(!entity.fields[0].nullable);
        assert!(entity.fields[1].nullable);
    }

    #[test]
    fn column_annotation_overrides_name_and_nullability() {
        let mut class = user_class();
        class.fields.push(FieldDescriptor {
            annotations: vec![Annotation::named("Column")
                .with_param("name", "created_at")
                .with_param("nullable", "false")],
            ..field("createdAt", "Instant")
        });

        let entity = JpaParser.parse(&class).unwrap();
        let created = &entity.fields[2];
        assert_eq!(created.column_name, "created_at");
        assert!(!created.nullable);
        assert_eq!(created.field_type, FieldType::DateTime);
    }

    #[test]
    fn column_name_defaults_to_snake_case() {
        let mut class = user_class();
        class.fields.push(field("firstName", "String"));
        let entity = JpaParser.parse(&class).unwrap();
        assert_eq!(entity.fields[2].column_name, "first_name");
    }

    #[test]
    fn excludes_static_transient_and_annotated_fields() {
        let mut class = user_class();
        class.fields.push(FieldDescriptor {
            modifiers: vec!["static".to_string(), "final".to_string()],
            ..field("serialVersionUID", "long")
        });
        class.fields.push(FieldDescriptor {
            modifiers: vec!["transient".to_string()],
            ..field("cached", "boolean")
        });
        class.fields.push(FieldDescriptor {
            annotations: vec![Annotation::named("Transient")],
            ..field("derived", "String")
        });

        let entity = JpaParser.parse(&class).unwrap();
        assert_eq!(entity.fields.len(), 2);
    }

    #[test]
    fn table_annotation_overrides_table_name() {
        let mut class = user_class();
        class.annotations.push(Annotation::named("Table").with_param("name", "t_user"));
        let entity = JpaParser.parse(&class).unwrap();
        assert_eq!(entity.table_name, "t_user");
    }

    #[test]
    fn class_without_entity_marker_yields_none() {
        let mut class = user_class();
        class.annotations.clear();
        assert!(JpaParser.parse(&class).is_none());
    }

    #[test]
    fn entity_without_primary_key_yields_none() {
        let mut class = user_class();
        class.fields[0].annotations.clear();
        assert!(JpaParser.parse(&class).is_none());
    }

    #[test]
    fn composite_primary_key_yields_none() {
        let mut class = user_class();
        class.fields[1].annotations.push(Annotation::named("Id"));
        assert!(JpaParser.parse(&class).is_none());
    }

    #[test]
    fn carries_raw_annotation_tags_with_params() {
        let mut class = user_class();
        class.fields[0]
            .annotations
            .push(Annotation::named("GeneratedValue").with_param("strategy", "IDENTITY"));

        let entity = JpaParser.parse(&class).unwrap();
        let id = &entity.fields[0];
        assert!(id.annotations.contains_key("Id"));
        let generated = id.annotations.get("GeneratedValue").unwrap();
        assert_eq!(generated.get("strategy").map(String::as_str), Some("IDENTITY"));
        assert!(entity.fields[1].annotations.is_empty());

        let value = serde_json::to_value(&entity).unwrap();
        assert_eq!(value["fields"][0]["annotations"]["GeneratedValue"]["strategy"], "IDENTITY");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let entity = JpaParser.parse(&user_class()).unwrap();
        let value = serde_json::to_value(&entity).unwrap();
        assert_eq!(value["simpleName"], "User");
        assert_eq!(value["tableName"], "user");
        assert_eq!(value["fields"][0]["type"], "long");
        assert_eq!(value["fields"][0]["primaryKey"], true);
        assert_eq!(value["fields"][1]["columnName"], "name");
    }
}
