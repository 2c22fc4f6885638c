//! InMemoryCustomerStore - 開発・テスト用の顧客ストア

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{CustomerRecord, Phone, Result, RetentionError};
use crate::ports::CustomerStore;

/// BTreeMap で電話番号順に保持する
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    records: RwLock<BTreeMap<Phone, CustomerRecord>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = CustomerRecord>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.records.write() {
            map.extend(records.into_iter().map(|r| (r.phone.clone(), r)));
        }
        store
    }

    pub fn insert(&self, record: CustomerRecord) -> Result<()> {
        let mut map = self
            .records
            .write()
            .map_err(|_| RetentionError::Store("in-memory store lock poisoned".to_string()))?;
        map.insert(record.phone.clone(), record);
        Ok(())
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn find_by_phone(&self, phone: &Phone) -> Result<Option<CustomerRecord>> {
        let map = self
            .records
            .read()
            .map_err(|_| RetentionError::Store("in-memory store lock poisoned".to_string()))?;
        Ok(map.get(phone).cloned())
    }

    async fn list_phones(&self) -> Result<Vec<Phone>> {
        let map = self
            .records
            .read()
            .map_err(|_| RetentionError::Store("in-memory store lock poisoned".to_string()))?;
        Ok(map.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_and_find() {
        let store = InMemoryCustomerStore::new();
        let record = CustomerRecord::sample("408-555-0101");
        store.insert(record.clone()).unwrap();

        let found = store.find_by_phone(&record.phone).await.unwrap();
        assert_eq!(found, Some(record));

        let other = Phone::new("408-555-9999").unwrap();
        assert!(store.find_by_phone(&other).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn phones_are_sorted() {
        let store = InMemoryCustomerStore::with_records([
            CustomerRecord::sample("650-555-0003"),
            CustomerRecord::sample("408-555-0001"),
        ]);
        let phones = store.list_phones().await.unwrap();
        assert_eq!(phones[0].as_str(), "408-555-0001");
        assert_eq!(phones.len(), 2);
    }
}
