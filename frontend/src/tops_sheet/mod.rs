pub mod modal_sheet;
