//! UI Components
//!
//! Leptos components rendering the appointment store.

mod appointment_list;
mod delete_appointment_button;
mod edit_modal;
mod new_appointment_form;
mod pagination_bar;
mod search_bar;

pub use appointment_list::AppointmentList;
pub use delete_appointment_button::DeleteAppointmentButton;
pub use edit_modal::EditModal;
pub use new_appointment_form::NewAppointmentForm;
pub use pagination_bar::PaginationBar;
pub use search_bar::SearchBar;
