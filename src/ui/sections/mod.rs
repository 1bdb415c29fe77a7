//! Landing page sections, top to bottom

mod benefits;
mod footer;
mod hero;
mod how_it_works;
mod navigation;
mod waitlist_cta;

pub use benefits::BenefitsSection;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorksSection;
pub use navigation::Navigation;
pub use waitlist_cta::WaitlistSection;
