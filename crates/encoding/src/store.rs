//! EncodingStore: key/value encoding over any [`Store`]
//!
//! Every operation resolves its encoders (the adapter's defaults, shadowed by
//! any override in the call's [`CallOptions`]), encodes inputs, translates
//! options and forwards to the backend. Results read back are decoded; a
//! decode failure becomes [`Error::Decode`], a backend failure is forwarded
//! as [`Error::Store`] untouched.
//!
//! The adapter holds no mutable state of its own. Ordering, atomicity and
//! snapshot behaviour are whatever the backend provides.

use std::sync::Arc;

use tracing::{debug, trace};

use encodedb_codec::{Codec, CodecOptions, Encoders};
use encodedb_core::{BatchOp, OptionMap, Store, Supports, Transport, Value, APPROXIMATE_SIZE, COMPACT_RANGE};

use crate::batch::ChainedBatch;
use crate::capability::{RangeCompactor, SizeEstimator};
use crate::error::{Error, Result};
use crate::iterator::EncodingIterator;
use crate::options::CallOptions;
use crate::translate;

/// Encoding adapter over a backend store
pub struct EncodingStore {
    db: Arc<dyn Store>,
    codec: Codec,
    supports: Supports,
}

impl EncodingStore {
    /// Wrap `db` with `utf8` keys and values
    pub fn new(db: Arc<dyn Store>) -> Result<Self> {
        Self::with_options(db, CodecOptions::default())
    }

    /// Wrap `db` with the given encodings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Codec`] if an encoding name is unknown.
    pub fn with_options(db: Arc<dyn Store>, options: CodecOptions) -> Result<Self> {
        let codec = Codec::new(options)?;
        let supports = mirror_supports(db.as_ref());
        debug!(
            target: "encodedb::encoding",
            key_encoding = codec.encoders().key.name(),
            value_encoding = codec.encoders().value.name(),
            approximate_size = supports.has_method(APPROXIMATE_SIZE),
            compact_range = supports.has_method(COMPACT_RANGE),
            "Encoding adapter created"
        );
        Ok(Self {
            db,
            codec,
            supports,
        })
    }

    /// The wrapped backend
    pub fn db(&self) -> &Arc<dyn Store> {
        &self.db
    }

    /// The adapter's codec
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Backend capabilities with `encodings` set
    pub fn supports(&self) -> &Supports {
        &self.supports
    }

    fn encoders(&self, options: &CallOptions) -> Result<Encoders> {
        Ok(self
            .codec
            .resolve(options.key_encoding.as_ref(), options.value_encoding.as_ref())?)
    }

    /// Open the backend
    pub fn open(&self, options: &OptionMap) -> Result<()> {
        self.db.open(options)?;
        Ok(())
    }

    /// Close the backend
    pub fn close(&self) -> Result<()> {
        self.db.close()?;
        Ok(())
    }

    /// Store `value` under `key`
    pub fn put(
        &self,
        key: impl Into<Value>,
        value: impl Into<Value>,
        options: &CallOptions,
    ) -> Result<()> {
        let (key, value) = (key.into(), value.into());
        Error::check_key(&key)?;
        Error::check_value(&value)?;
        let encoders = self.encoders(options)?;
        let key = encoders.encode_key(&key)?;
        let value = encoders.encode_value(&value)?;
        trace!(target: "encodedb::encoding", "put");
        self.db.put(key, value, &options.fields)?;
        Ok(())
    }

    /// Value stored under `key`, `None` if not found.
    ///
    /// The backend is asked for the value in the value encoder's shape unless
    /// the caller set `asBuffer` explicitly.
    pub fn get(&self, key: impl Into<Value>, options: &CallOptions) -> Result<Option<Value>> {
        let key = key.into();
        Error::check_key(&key)?;
        let encoders = self.encoders(options)?;
        let key = encoders.encode_key(&key)?;
        let fields = translate::read_options(&options.fields, &encoders);
        trace!(target: "encodedb::encoding", "get");
        let data = self.db.get(key, &fields)?;
        data.map(|data| encoders.decode_value(data).map_err(Error::decode))
            .transpose()
    }

    /// Values for `keys`, positionally; `None` for keys not found.
    ///
    /// Fails on the first value that cannot be decoded.
    pub fn get_many<K: Into<Value>>(
        &self,
        keys: impl IntoIterator<Item = K>,
        options: &CallOptions,
    ) -> Result<Vec<Option<Value>>> {
        let keys: Vec<Value> = keys.into_iter().map(Into::into).collect();
        keys.iter().try_for_each(Error::check_key)?;
        let encoders = self.encoders(options)?;
        let keys = keys
            .iter()
            .map(|key| encoders.encode_key(key))
            .collect::<std::result::Result<Vec<Transport>, _>>()?;
        let fields = translate::read_options(&options.fields, &encoders);
        trace!(target: "encodedb::encoding", count = keys.len(), "get_many");
        self.db
            .get_many(keys, &fields)?
            .into_iter()
            .map(|slot| {
                slot.map(|data| encoders.decode_value(data).map_err(Error::decode))
                    .transpose()
            })
            .collect()
    }

    /// Delete `key`
    pub fn del(&self, key: impl Into<Value>, options: &CallOptions) -> Result<()> {
        let key = key.into();
        Error::check_key(&key)?;
        let encoders = self.encoders(options)?;
        let key = encoders.encode_key(&key)?;
        trace!(target: "encodedb::encoding", "del");
        self.db.del(key, &options.fields)?;
        Ok(())
    }

    /// Apply `operations` as one backend batch.
    ///
    /// Every operation is encoded with the call's encoders before anything
    /// is submitted.
    pub fn batch(&self, operations: Vec<BatchOp<Value>>, options: &CallOptions) -> Result<()> {
        let operations = operations
            .into_iter()
            .map(|op| (op, CallOptions::default()))
            .collect();
        self.batch_with_encodings(operations, options)
    }

    /// Apply `operations` as one backend batch, each with its own encodings.
    ///
    /// An operation's `key_encoding` / `value_encoding` shadow the call's for
    /// that operation only; its `fields` are not used. Nothing is submitted
    /// unless every operation encodes.
    pub fn batch_with_encodings(
        &self,
        operations: Vec<(BatchOp<Value>, CallOptions)>,
        options: &CallOptions,
    ) -> Result<()> {
        let encoders = self.encoders(options)?;
        let operations = operations
            .into_iter()
            .map(|(op, overrides)| {
                if overrides.key_encoding.is_none() && overrides.value_encoding.is_none() {
                    return encode_op(&encoders, op);
                }
                let own = self.codec.resolve(
                    overrides.key_encoding.as_ref().or(options.key_encoding.as_ref()),
                    overrides.value_encoding.as_ref().or(options.value_encoding.as_ref()),
                )?;
                encode_op(&own, op)
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(target: "encodedb::encoding", operations = operations.len(), "batch");
        self.db.batch(operations, &options.fields)?;
        Ok(())
    }

    /// Chained batch over the backend's own chained batch
    pub fn chained_batch(&self) -> ChainedBatch<'_> {
        ChainedBatch::new(self.db.chained_batch(), &self.codec)
    }

    /// Iterator over decoded entries.
    ///
    /// Range bounds in `options.fields` are key-encoded; `keys` / `values`
    /// default to true and the buffer flags follow the encoders.
    pub fn iterator(&self, options: &CallOptions) -> Result<EncodingIterator<'_>> {
        let encoders = self.encoders(options)?;
        let fields = translate::iterator_options(&options.fields, &encoders)?;
        let keys = fields.flag_unless_false(encodedb_core::names::KEYS);
        let values = fields.flag_unless_false(encodedb_core::names::VALUES);
        trace!(target: "encodedb::encoding", keys, values, "iterator");
        let inner = self.db.iterator(&fields);
        Ok(EncodingIterator::new(inner, encoders, keys, values))
    }

    /// Delete a key range.
    ///
    /// Range bounds are key-encoded; `reverse` defaults to false and `limit`
    /// to -1 (no limit).
    pub fn clear(&self, options: &CallOptions) -> Result<()> {
        let encoders = self.encoders(options)?;
        let fields = translate::clear_options(&options.fields, encoders.key.as_ref())?;
        debug!(target: "encodedb::encoding", "clear");
        self.db.clear(&fields)?;
        Ok(())
    }

    /// `approximate_size` handle, present only if the backend implements it
    pub fn approximate_size(&self) -> Option<SizeEstimator<'_>> {
        self.db
            .as_approximate_size()
            .map(|inner| SizeEstimator::new(inner, &self.codec))
    }

    /// `compact_range` handle, present only if the backend implements it
    pub fn compact_range(&self) -> Option<RangeCompactor<'_>> {
        self.db
            .as_compact_range()
            .map(|inner| RangeCompactor::new(inner, &self.codec))
    }
}

impl std::fmt::Debug for EncodingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodingStore")
            .field("codec", &self.codec)
            .field("supports", &self.supports)
            .finish_non_exhaustive()
    }
}

fn encode_op(encoders: &Encoders, op: BatchOp<Value>) -> Result<BatchOp<Transport>> {
    Error::check_key(op.key())?;
    Ok(match op {
        BatchOp::Put { key, value } => {
            Error::check_value(&value)?;
            BatchOp::Put {
                key: encoders.encode_key(&key)?,
                value: encoders.encode_value(&value)?,
            }
        }
        BatchOp::Del { key } => BatchOp::Del {
            key: encoders.encode_key(&key)?,
        },
    })
}

/// Backend capabilities as seen through the adapter.
///
/// `encodings` is set; the optional methods are advertised exactly when the
/// backend implements them.
fn mirror_supports(db: &dyn Store) -> Supports {
    let mut supports = db.supports();
    supports.encodings = true;
    let present = [
        (APPROXIMATE_SIZE, db.as_approximate_size().is_some()),
        (COMPACT_RANGE, db.as_compact_range().is_some()),
    ];
    for (name, implemented) in present {
        if implemented {
            supports.additional_methods.insert(name.to_string(), true);
        } else {
            supports.additional_methods.remove(name);
        }
    }
    supports
}
