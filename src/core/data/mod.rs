//! Core data types shared by extraction and merging.
//!
//! ## Module Structure
//!
//! - `component`: extracted component metadata (ComponentMetadata, MemberKind, MemberInfo)
//! - `translation`: locale file contents and placeholder descriptions (TranslationData)

pub mod component;
pub mod translation;

pub use component::{ComponentDefinition, ComponentMetadata, MemberInfo, MemberKind, Members};
pub use translation::{
    Descriptions, InvalidCategory, MISSING_DESCRIPTION, TranslationData, is_placeholder,
    placeholder,
};
