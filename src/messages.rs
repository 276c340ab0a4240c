//! User-Facing Text
//!
//! Central catalog of alert messages and interface labels. Raw errors go
//! to the console; only these strings reach the user.

// ============ Alert Messages ============

pub const LOAD_DATASET_ERROR: &str = "Could not load dataset.";
pub const DATASET_UPDATED: &str = "Dataset updated.";
pub const DATASET_UPDATE_ERROR: &str = "Could not update dataset.";
pub const DATASET_CREATED: &str = "Dataset created.";
pub const DATASET_CREATE_ERROR: &str = "Could not create dataset.";
pub const DATASET_DELETED: &str = "Dataset deleted.";
pub const DATASET_DELETE_ERROR: &str = "Could not delete dataset.";
pub const LOAD_ENTRIES_ERROR: &str = "Could not load entries.";
pub const MISSING_FIELDS: &str = "Please provide value, label and date.";
pub const ENTRY_CREATED: &str = "Entry created.";
pub const ENTRY_CREATE_ERROR: &str = "Could not create entry.";
pub const ENTRY_UPDATED: &str = "Entry updated.";
pub const ENTRY_UPDATE_ERROR: &str = "Could not update entry.";
pub const ENTRY_DELETED: &str = "Entry deleted.";
pub const ENTRY_DELETE_ERROR: &str = "Could not delete entry.";
pub const GRAPH_LOAD_ERROR: &str = "Loading the chart data failed.";
pub const DATASET_META_ERROR: &str = "Could not load the dataset details.";
pub const DATASET_COPIED: &str = "Dataset copied.";
pub const ENTRY_COPY_ERROR: &str = "Could not copy all entries.";

// ============ Series Names ============

pub const SERIES_ACTUAL: &str = "Actual";
pub const SERIES_PROJECTED: &str = "Projected";

// ============ Headers ============

pub const APP_TITLE: &str = "Trackboard";
pub const HEADER_DATASET: &str = "Dataset:";
pub const HEADER_CREATE_DATASET: &str = "Create Dataset";
pub const HEADER_ENTRIES: &str = "Entries";
pub const HEADER_GRAPH_ACTUAL: &str = "Graph: Actual";
pub const HEADER_GRAPH_TARGET: &str = "Graph: Target";
pub const HEADER_GRAPH_END_DATE: &str = "Graph: End date";
pub const HEADER_EDIT: &str = "Edit";
pub const CHART_NO_DATA: &str = "No data to display.";
pub const CONFIRM_DELETE: &str = "Do you really want to delete this?";

// ============ Labels ============

pub const LABEL_NAME: &str = "Name";
pub const LABEL_DESCRIPTION: &str = "Description";
pub const LABEL_SYMBOL: &str = "Symbol";
pub const LABEL_TARGET_VALUE: &str = "Target value";
pub const LABEL_START_DATE: &str = "Start date";
pub const LABEL_END_DATE: &str = "End date";
pub const CONFIRM_DELETE_DATASET: &str = "Confirm deleting this dataset.";
pub const CONFIRM_DELETE_ENTRY: &str = "Confirm deleting this entry.";

// ============ Tabs ============

pub const TAB_DATA: &str = "Data";
pub const TAB_EDIT: &str = "Edit";

// ============ Validation ============

pub const NAME_REQUIRED: &str = "Name is required.";
pub const SYMBOL_REQUIRED: &str = "Symbol is required.";

// ============ Table ============

pub const TABLE_LABEL: &str = "Label";
pub const TABLE_VALUE: &str = "Value";
pub const TABLE_DATE: &str = "Date";
pub const TABLE_ACTIONS: &str = "Actions";
pub const TABLE_LOADING: &str = "Loading entries...";

// ============ Buttons ============

pub const BTN_ADD: &str = "Add";
pub const BTN_CLEAR: &str = "Clear";
pub const BTN_SAVE: &str = "Save";
pub const BTN_DELETE: &str = "Delete";
pub const BTN_CREATE: &str = "Create";
pub const BTN_UPDATE: &str = "Update";
pub const BTN_CANCEL: &str = "Cancel";
pub const BTN_CONFIRM: &str = "Confirm";
pub const BTN_COPY: &str = "Copy";
pub const BTN_NEW_DATASET: &str = "Add Dataset";

// ============ Placeholders ============

pub const PLACEHOLDER_LABEL: &str = "Label";
pub const PLACEHOLDER_VALUE: &str = "Value";

// ============ Graph ============

pub const GRAPH_LOADING: &str = "Loading graph...";
pub const GRAPH_X_AXIS: &str = "Date";
pub const GRAPH_Y_AXIS: &str = "Value";
