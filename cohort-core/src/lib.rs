pub mod config;
pub mod display;
pub mod error;
pub mod page_numbers;
pub mod pagination;
pub mod programs;

pub use config::{Settings, settings_path};
pub use display::{DisplayOptions, info_text, page_bar_text};
pub use error::CohortError;
pub use page_numbers::{PageControl, page_controls, visible_page_numbers};
pub use pagination::{PageWindow, PaginationState, Paginator, clamp_page, compute, total_pages};
pub use programs::{
    Event, EventFilter, EventStatus, Member, MemberFilter, Role, load_records, sample_events,
    sample_members,
};
