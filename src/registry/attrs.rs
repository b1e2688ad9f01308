//! Attribute schemas for application categories and types
//!
//! Each application stores its connection details in a free-form `attrs`
//! map. The schemas here describe which keys belong to a category or type,
//! which are required on write, and which are secrets that must never be
//! echoed back.

use serde::Serialize;
use serde_json::Value;

use super::category::{AppCategory, AppType};

/// Value kind of a single attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Integer,
    Uuid,
}

/// One attribute in a schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttrField {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Write-only field (passwords); never serialized back out
    pub secret: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl AttrField {
    fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required: false,
            secret: false,
            default: None,
        }
    }

    fn string(name: &str) -> Self {
        Self::new(name, FieldKind::String)
    }

    fn integer(name: &str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    fn uuid(name: &str) -> Self {
        Self::new(name, FieldKind::Uuid)
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// A named set of attribute fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttrsSchema {
    pub name: String,
    pub fields: Vec<AttrField>,
}

impl AttrsSchema {
    pub fn new(name: impl Into<String>, fields: Vec<AttrField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&AttrField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn has_secrets(&self) -> bool {
        self.fields.iter().any(|f| f.secret)
    }

    /// Build a new schema from `self` followed by `other`.
    ///
    /// Fields of `other` replace same-named fields of `self` in place.
    fn extend(&self, name: impl Into<String>, other: Vec<AttrField>) -> Self {
        let mut fields = self.fields.clone();
        for field in other {
            match fields.iter_mut().find(|f| f.name == field.name) {
                Some(existing) => *existing = field,
                None => fields.push(field),
            }
        }
        Self::new(name, fields)
    }
}

/// Schema holding the fields shared by every type in `category`.
pub fn category_schema(category: AppCategory) -> AttrsSchema {
    match category {
        AppCategory::Db => AttrsSchema::new(
            "DBAttrsSerializer",
            vec![
                AttrField::string("host").required(),
                AttrField::integer("port").required(),
                AttrField::string("database"),
            ],
        ),
        AppCategory::RemoteApp => AttrsSchema::new(
            "RemoteAppAttrsSerializer",
            vec![
                AttrField::uuid("asset").required(),
                AttrField::string("path").required(),
            ],
        ),
        AppCategory::Cloud => AttrsSchema::new(
            "CloudAttrsSerializer",
            vec![AttrField::string("cluster").required()],
        ),
    }
}

fn db_port(name: &str, port: i64) -> AttrsSchema {
    category_schema(AppCategory::Db).extend(
        name,
        vec![AttrField::integer("port").required().default_value(port)],
    )
}

/// Schema for a concrete application type.
pub fn type_schema(app_type: AppType) -> AttrsSchema {
    let remote = category_schema(AppCategory::RemoteApp);
    match app_type {
        AppType::Mysql => db_port("MySQLAttrsSerializer", 3306),
        AppType::Mariadb => db_port("MariaDBAttrsSerializer", 3306),
        AppType::Oracle => db_port("OracleAttrsSerializer", 1521),
        AppType::Postgresql => db_port("PostgreAttrsSerializer", 5432),
        AppType::Sqlserver => db_port("SQLServerAttrsSerializer", 1433),
        AppType::Redis => db_port("RedisAttrsSerializer", 6379),
        AppType::Mongodb => db_port("MongoDBAttrsSerializer", 27017),
        AppType::Chrome => remote.extend(
            "ChromeAttrsSerializer",
            vec![
                AttrField::string("path").required().default_value("C:\\Program Files (x86)\\Google\\Chrome\\Application\\chrome.exe"),
                AttrField::string("chrome_target").required(),
                AttrField::string("chrome_username"),
                AttrField::string("chrome_password").secret(),
            ],
        ),
        AppType::MysqlWorkbench => remote.extend(
            "MySQLWorkbenchAttrsSerializer",
            vec![
                AttrField::string("path").required().default_value("C:\\Program Files\\MySQL\\MySQL Workbench 8.0 CE\\MySQLWorkbench.exe"),
                AttrField::string("mysql_workbench_ip").required(),
                AttrField::integer("mysql_workbench_port")
                    .required()
                    .default_value(3306),
                AttrField::string("mysql_workbench_name").required(),
                AttrField::string("mysql_workbench_username"),
                AttrField::string("mysql_workbench_password").secret(),
            ],
        ),
        AppType::VmwareClient => remote.extend(
            "VMwareClientAttrsSerializer",
            vec![
                AttrField::string("path").required().default_value("C:\\Program Files (x86)\\VMware\\Infrastructure\\Virtual Infrastructure Client\\Launcher\\VpxClient.exe"),
                AttrField::string("vmware_target").required(),
                AttrField::string("vmware_username"),
                AttrField::string("vmware_password").secret(),
            ],
        ),
        AppType::Custom => remote.extend(
            "CustomAttrsSerializer",
            vec![
                AttrField::string("custom_cmdline"),
                AttrField::string("custom_target").required(),
                AttrField::string("custom_username"),
                AttrField::string("custom_password").secret(),
            ],
        ),
        AppType::K8s => {
            category_schema(AppCategory::Cloud).extend("K8SAttrsSerializer", Vec::new())
        }
    }
}

/// Union of every type schema with all secret fields removed.
pub fn no_password_schema() -> AttrsSchema {
    let mut fields: Vec<AttrField> = Vec::new();
    for app_type in AppType::ALL {
        for field in type_schema(app_type).fields {
            if field.secret || fields.iter().any(|f| f.name == field.name) {
                continue;
            }
            // Required-ness is per type; a merged read schema cannot enforce it.
            fields.push(AttrField {
                required: false,
                default: None,
                ..field
            });
        }
    }
    AttrsSchema::new("NoPasswordAttrsSerializer", fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_type_overrides_port_default() {
        let schema = type_schema(AppType::Postgresql);
        let port = schema.field("port").unwrap();
        assert_eq!(port.default, Some(Value::from(5432)));
        assert_eq!(schema.field_names(), vec!["host", "port", "database"]);
    }

    #[test]
    fn test_remote_app_types_have_secrets() {
        for app_type in AppCategory::RemoteApp.types() {
            assert!(
                type_schema(app_type).has_secrets(),
                "{} should carry a password field",
                app_type
            );
        }
    }

    #[test]
    fn test_chrome_schema_extends_remote_app() {
        let schema = type_schema(AppType::Chrome);
        assert!(schema.field("asset").unwrap().required);
        assert!(schema.field("chrome_target").is_some());
        assert!(schema.field("chrome_password").unwrap().secret);
        // `path` is replaced in place, not duplicated
        assert_eq!(schema.fields.iter().filter(|f| f.name == "path").count(), 1);
    }

    #[test]
    fn test_no_password_schema_has_no_secrets() {
        let schema = no_password_schema();
        assert!(!schema.has_secrets());
        assert!(schema.field("host").is_some());
        assert!(schema.field("cluster").is_some());
        assert!(schema.field("chrome_username").is_some());
        assert!(schema.field("chrome_password").is_none());
        assert!(schema.fields.iter().all(|f| !f.required));
    }

    #[test]
    fn test_no_password_schema_is_deduplicated() {
        let schema = no_password_schema();
        let mut names = schema.field_names();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
