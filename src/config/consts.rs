// src/config/consts.rs

// Net config
pub const HOST: &str = "sit-coop.jp";
pub const PREFIX: &str = "/products/";

// Page shape markers (see specs::textbooks::SHAPE)
pub const CELL_CLASS: &str = "listlefttbloc";
pub const SUBJECT_MARKER: &str = "科目名";
pub const TEACHER_MARKER: &str = "教員名";
pub const SUBJECT_LABEL: &str = "【科目名】";
pub const TEACHER_LABEL: &str = "【教員名】";

// Clip text
pub const FIELD_SEP: &str = ", ";

// Confirmation prompt body, verbatim
pub const CONFIRM_MESSAGE: &str = "clip?";
