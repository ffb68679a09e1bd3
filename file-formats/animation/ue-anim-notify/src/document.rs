//! Exported object array loading

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{NotifyError, Result};
use crate::sequence::AnimSequenceInfo;
use crate::sound::WeaponSoundIndex;
use crate::types::{ANIM_SEQUENCE_TYPE, AnimSequenceProperties, ExportObject};

/// A parsed export: the top-level JSON array of objects
#[derive(Debug, Clone, Default)]
pub struct ExportDocument {
    objects: Vec<ExportObject>,
}

impl ExportDocument {
    /// Wrap already parsed objects
    pub fn new(objects: Vec<ExportObject>) -> Self {
        Self { objects }
    }

    /// Parse a document from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Parse a document from JSON bytes
    ///
    /// A leading UTF-8 byte order mark is ignored.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        Ok(Self::new(serde_json::from_slice(bytes)?))
    }

    /// Parse a document from a reader
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_slice(&bytes)
    }

    /// Load a document from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading export {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// All objects in export order
    pub fn objects(&self) -> &[ExportObject] {
        &self.objects
    }

    /// Objects with the given `Type`
    pub fn objects_of_type<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a ExportObject> {
        self.objects.iter().filter(move |object| object.is_kind(kind))
    }

    /// The first `AnimSequence` export with its typed properties
    pub fn anim_sequence(&self) -> Result<(&ExportObject, AnimSequenceProperties)> {
        let object = self
            .objects_of_type(ANIM_SEQUENCE_TYPE)
            .next()
            .ok_or(NotifyError::MissingAnimSequence)?;

        let props = if object.properties.is_null() {
            AnimSequenceProperties::default()
        } else {
            serde_json::from_value(object.properties.clone())?
        };

        Ok((object, props))
    }

    /// Validated timing of the first `AnimSequence`
    pub fn sequence_info(&self) -> Result<AnimSequenceInfo> {
        let (object, props) = self.anim_sequence()?;
        AnimSequenceInfo::from_properties(object.name.clone(), &props)
    }

    /// Index of all weapon sound notify objects in the document
    pub fn weapon_sound_index(&self) -> WeaponSoundIndex {
        WeaponSoundIndex::build(&self.objects)
    }
}
