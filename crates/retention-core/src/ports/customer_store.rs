//! CustomerStore port - 顧客レコードの参照

use async_trait::async_trait;

use crate::domain::{CustomerRecord, Phone, Result};

/// CustomerStore は電話番号で顧客レコードを引く
///
/// # 契約
/// - 見つからなければ `Ok(None)`（エラーではない）
/// - 実装はパラメータバインドでクエリを組み立てること
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn find_by_phone(&self, phone: &Phone) -> Result<Option<CustomerRecord>>;

    /// All known customer keys, sorted.
    async fn list_phones(&self) -> Result<Vec<Phone>>;
}
