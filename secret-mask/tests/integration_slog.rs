//! Logging masked entities through `slog`.

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use secret_mask::{
    schema::{MysqlConnection, ServiceConnection, ServiceConnectionConfig},
    slog::IntoMaskedJson,
    MASKED_SECRET,
};
use serde_json::{json, Value as JsonValue};
use slog::{Key, Serializer, Value as SlogValue};

#[derive(Default)]
struct CapturingSerializer {
    captured: RefCell<HashMap<String, JsonValue>>,
}

impl Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), JsonValue::String(val.to_string()));
        Ok(())
    }

    fn emit_serde(&mut self, key: Key, value: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(value.as_serde()).unwrap_or(JsonValue::Null);
        self.captured.borrow_mut().insert(key.into(), json);
        Ok(())
    }
}

fn serialize(value: &dyn SlogValue) -> JsonValue {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    let mut serializer = CapturingSerializer::default();
    value.serialize(&record, "entity", &mut serializer).unwrap();
    let captured = serializer.captured.borrow();
    captured.get("entity").cloned().unwrap_or(JsonValue::Null)
}

#[test]
fn logged_connection_is_masked() {
    let connection = ServiceConnection::new(ServiceConnectionConfig::Mysql(MysqlConnection {
        username: "admin".into(),
        ..MysqlConnection::with_password("PASSWORD")
    }));

    let logged = serialize(&connection.to_masked_json());

    assert_eq!(
        logged,
        json!({
            "config": {
                "type": "Mysql",
                "username": "admin",
                "authType": { "password": MASKED_SECRET },
                "hostPort": ""
            }
        })
    );
    assert_eq!(
        connection,
        ServiceConnection::new(ServiceConnectionConfig::Mysql(MysqlConnection {
            username: "admin".into(),
            ..MysqlConnection::with_password("PASSWORD")
        })),
        "the logged value is a masked clone"
    );
}
