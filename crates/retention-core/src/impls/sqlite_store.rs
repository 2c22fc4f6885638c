//! SqliteCustomerStore - rusqlite で顧客テーブルを読む
//!
//! すべてのクエリは prepared statement + バインドパラメータ。
//! 文字列連結で SQL を組み立てる箇所はない。

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::debug;

use crate::domain::customer::{decode_yes_no, encode_yes_no};
use crate::domain::{CustomerRecord, Phone, Result, RetentionError};
use crate::ports::CustomerStore;

const SELECT_CUSTOMER: &str = r#"
    SELECT phone, state, account_length, area_code, intl_plan, vmail_plan,
           vmail_message, day_mins, day_calls, eve_mins, eve_calls,
           night_mins, night_calls, intl_mins, intl_calls, custserv_calls
    FROM customers
    WHERE phone = ?1
"#;

impl From<rusqlite::Error> for RetentionError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Store(err.to_string())
    }
}

#[derive(Clone)]
pub struct SqliteCustomerStore {
    conn: Arc<Mutex<Connection>>,
}

impl std::fmt::Debug for SqliteCustomerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteCustomerStore").finish_non_exhaustive()
    }
}

impl SqliteCustomerStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.migrate()?;
        Ok(store)
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.lock()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS customers (
                phone TEXT PRIMARY KEY,
                state TEXT NOT NULL,
                account_length INTEGER NOT NULL,
                area_code INTEGER NOT NULL,
                intl_plan TEXT NOT NULL,
                vmail_plan TEXT NOT NULL,
                vmail_message INTEGER NOT NULL,
                day_mins REAL NOT NULL,
                day_calls INTEGER NOT NULL,
                eve_mins REAL NOT NULL,
                eve_calls INTEGER NOT NULL,
                night_mins REAL NOT NULL,
                night_calls INTEGER NOT NULL,
                intl_mins REAL NOT NULL,
                intl_calls INTEGER NOT NULL,
                custserv_calls INTEGER NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    pub fn upsert(&self, record: &CustomerRecord) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            r#"
            INSERT INTO customers(
                phone, state, account_length, area_code, intl_plan, vmail_plan,
                vmail_message, day_mins, day_calls, eve_mins, eve_calls,
                night_mins, night_calls, intl_mins, intl_calls, custserv_calls
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)
            ON CONFLICT(phone) DO UPDATE SET
              state=excluded.state,
              account_length=excluded.account_length,
              area_code=excluded.area_code,
              intl_plan=excluded.intl_plan,
              vmail_plan=excluded.vmail_plan,
              vmail_message=excluded.vmail_message,
              day_mins=excluded.day_mins,
              day_calls=excluded.day_calls,
              eve_mins=excluded.eve_mins,
              eve_calls=excluded.eve_calls,
              night_mins=excluded.night_mins,
              night_calls=excluded.night_calls,
              intl_mins=excluded.intl_mins,
              intl_calls=excluded.intl_calls,
              custserv_calls=excluded.custserv_calls
            "#,
            params![
                record.phone.as_str(),
                record.state,
                record.account_length,
                record.area_code,
                encode_yes_no(record.international_plan),
                encode_yes_no(record.voicemail_plan),
                record.voicemail_messages,
                record.day_mins,
                record.day_calls,
                record.eve_mins,
                record.eve_calls,
                record.night_mins,
                record.night_calls,
                record.intl_mins,
                record.intl_calls,
                record.customer_service_calls,
            ],
        )?;
        Ok(())
    }

    /// Blocking lookup; the port wraps this in `spawn_blocking`.
    pub fn get(&self, phone: &Phone) -> Result<Option<CustomerRecord>> {
        let conn = self.lock()?;
        let row = conn
            .query_row(SELECT_CUSTOMER, params![phone.as_str()], CustomerRow::from_row)
            .optional()?;
        row.map(CustomerRow::into_record).transpose()
    }

    pub fn phones(&self) -> Result<Vec<Phone>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT phone FROM customers ORDER BY phone ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut out = Vec::new();
        for raw in rows {
            out.push(Phone::new(raw?)?);
        }
        Ok(out)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| RetentionError::Store("sqlite mutex poisoned".to_string()))
    }
}

#[async_trait]
impl CustomerStore for SqliteCustomerStore {
    async fn find_by_phone(&self, phone: &Phone) -> Result<Option<CustomerRecord>> {
        let store = self.clone();
        let phone = phone.clone();
        let found = tokio::task::spawn_blocking(move || store.get(&phone))
            .await
            .map_err(|e| RetentionError::Store(format!("lookup task failed: {e}")))??;
        debug!(found = found.is_some(), "sqlite customer lookup");
        Ok(found)
    }

    async fn list_phones(&self) -> Result<Vec<Phone>> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.phones())
            .await
            .map_err(|e| RetentionError::Store(format!("list task failed: {e}")))?
    }
}

/// Raw row as stored; categorical columns still undecoded.
struct CustomerRow {
    phone: String,
    state: String,
    account_length: u32,
    area_code: u32,
    intl_plan: String,
    vmail_plan: String,
    vmail_message: u32,
    day_mins: f64,
    day_calls: u32,
    eve_mins: f64,
    eve_calls: u32,
    night_mins: f64,
    night_calls: u32,
    intl_mins: f64,
    intl_calls: u32,
    custserv_calls: u32,
}

impl CustomerRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            phone: row.get("phone")?,
            state: row.get("state")?,
            account_length: row.get("account_length")?,
            area_code: row.get("area_code")?,
            intl_plan: row.get("intl_plan")?,
            vmail_plan: row.get("vmail_plan")?,
            vmail_message: row.get("vmail_message")?,
            day_mins: row.get("day_mins")?,
            day_calls: row.get("day_calls")?,
            eve_mins: row.get("eve_mins")?,
            eve_calls: row.get("eve_calls")?,
            night_mins: row.get("night_mins")?,
            night_calls: row.get("night_calls")?,
            intl_mins: row.get("intl_mins")?,
            intl_calls: row.get("intl_calls")?,
            custserv_calls: row.get("custserv_calls")?,
        })
    }

    fn into_record(self) -> Result<CustomerRecord> {
        Ok(CustomerRecord {
            phone: Phone::new(&self.phone)?,
            state: self.state,
            account_length: self.account_length,
            area_code: self.area_code,
            international_plan: decode_yes_no("intl_plan", &self.intl_plan)?,
            voicemail_plan: decode_yes_no("vmail_plan", &self.vmail_plan)?,
            voicemail_messages: self.vmail_message,
            day_mins: self.day_mins,
            day_calls: self.day_calls,
            eve_mins: self.eve_mins,
            eve_calls: self.eve_calls,
            night_mins: self.night_mins,
            night_calls: self.night_calls,
            intl_mins: self.intl_mins,
            intl_calls: self.intl_calls,
            customer_service_calls: self.custserv_calls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_then_get_roundtrips() {
        let store = SqliteCustomerStore::open_in_memory().unwrap();
        let record = CustomerRecord::sample("408-555-0101");
        store.upsert(&record).unwrap();

        let back = store.get(&record.phone).unwrap().unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn upsert_overwrites_existing_row() {
        let store = SqliteCustomerStore::open_in_memory().unwrap();
        let mut record = CustomerRecord::sample("408-555-0101");
        store.upsert(&record).unwrap();

        record.customer_service_calls = 7;
        record.international_plan = true;
        store.upsert(&record).unwrap();

        let back = store.get(&record.phone).unwrap().unwrap();
        assert_eq!(back.customer_service_calls, 7);
        assert!(back.international_plan);
        assert_eq!(store.phones().unwrap().len(), 1);
    }

    #[test]
    fn missing_phone_is_none() {
        let store = SqliteCustomerStore::open_in_memory().unwrap();
        let phone = Phone::new("415-555-0000").unwrap();
        assert!(store.get(&phone).unwrap().is_none());
    }

    #[test]
    fn plan_columns_are_stored_categorically() {
        let store = SqliteCustomerStore::open_in_memory().unwrap();
        let mut record = CustomerRecord::sample("408-555-0101");
        record.international_plan = true;
        store.upsert(&record).unwrap();

        let conn = store.lock().unwrap();
        let raw: String = conn
            .query_row(
                "SELECT intl_plan FROM customers WHERE phone = ?1",
                params![record.phone.as_str()],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(raw, "yes");
    }

    #[test]
    fn unrecognized_plan_value_is_a_store_error() {
        let store = SqliteCustomerStore::open_in_memory().unwrap();
        let record = CustomerRecord::sample("408-555-0101");
        store.upsert(&record).unwrap();
        store
            .lock()
            .unwrap()
            .execute("UPDATE customers SET intl_plan = 'sometimes'", [])
            .unwrap();

        let err = store.get(&record.phone).unwrap_err();
        assert!(matches!(err, RetentionError::Store(_)));
    }

    #[test]
    fn file_backed_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.db");
        let record = CustomerRecord::sample("408-555-0101");
        {
            let store = SqliteCustomerStore::open(&path).unwrap();
            store.upsert(&record).unwrap();
        }
        let store = SqliteCustomerStore::open(&path).unwrap();
        assert_eq!(store.get(&record.phone).unwrap(), Some(record));
    }

    #[tokio::test]
    async fn port_lists_phones_in_order() {
        let store = SqliteCustomerStore::open_in_memory().unwrap();
        store.upsert(&CustomerRecord::sample("510-555-0002")).unwrap();
        store.upsert(&CustomerRecord::sample("408-555-0001")).unwrap();

        let phones = store.list_phones().await.unwrap();
        let phones: Vec<&str> = phones.iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["408-555-0001", "510-555-0002"]);

        let phone = Phone::new("408-555-0001").unwrap();
        assert!(store.find_by_phone(&phone).await.unwrap().is_some());
    }
}
