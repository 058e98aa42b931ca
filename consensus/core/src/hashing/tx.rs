use crate::encoding::Encodable;
use crate::tx::{Transaction, TransactionId};
use crypto_hashes::HashWriter;

/// SHA256d over the consensus serialization of the transaction
pub fn calc_transaction_hash(tx: &Transaction) -> TransactionId {
    let mut writer = HashWriter::new();
    tx.consensus_encode(&mut writer).expect("hash writers cannot fail");
    writer.finalize_double()
}
