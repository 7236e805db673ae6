mod home;
pub use home::Home;

mod destinations;
pub use destinations::Destinations;

mod activities;
pub use activities::Activities;

mod culture;
pub use culture::Culture;

mod events;
pub use events::Events;

mod details;
pub use details::Details;

mod profile;
pub use profile::Profile;

mod contact;
pub use contact::Contact;
