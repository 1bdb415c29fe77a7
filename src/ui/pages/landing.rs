//! Landing page
//!
//! Marketing sections plus the two modals that make up the join flow. The
//! page variant and form variant come from [`LandingConfig`]; a "join" click
//! is routed by [`LandingConfig::route_join`].

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::content::{BRAND, HERO_LEAD};
use crate::core::{JoinRoute, LandingConfig};
use crate::ui::auth_modal::AuthModal;
use crate::ui::browser::{redirect_to, scroll_to_section};
use crate::ui::notifications::NotificationsContainer;
use crate::ui::sections::{
    BenefitsSection, Footer, Hero, HowItWorksSection, Navigation, WaitlistSection,
};
use crate::ui::session::use_session_context;
use crate::ui::waitlist_form::WaitlistFormModal;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = use_session_context();
    let config = StoredValue::new(LandingConfig::from_build_env());
    let (form_variant, tracks_status) = config.with_value(|c| (c.form, c.tracks_status()));

    let show_auth = RwSignal::new(false);
    let show_form = RwSignal::new(false);

    let on_join = Callback::new(move |_| {
        let route = config.with_value(|c| {
            c.route_join(
                session.status.with_untracked(|status| status.is_on_waitlist()),
                session.identity_untracked().is_some(),
            )
        });
        match route {
            JoinRoute::Redirect(url) => redirect_to(&url),
            JoinRoute::SignIn => show_auth.set(true),
            JoinRoute::OpenForm => show_form.set(true),
        }
    });

    // Continue into the survey once the account exists
    let on_authenticated = Callback::new(move |_| {
        if form_variant.requires_identity() {
            show_form.set(true);
        }
    });

    let on_joined = Callback::new(move |_| {
        config.with_value(|c| redirect_to(&c.success_redirect));
    });

    let on_learn_more = Callback::new(move |_| scroll_to_section("benefits"));

    view! {
        <Title text=format!("{} - AI Agents for Workflow Automation", BRAND) />
        <Meta name="description" content=HERO_LEAD />

        <div class="min-h-screen bg-white">
            <Navigation on_join=on_join tracks_status=tracks_status />
            <Hero on_join=on_join on_learn_more=on_learn_more tracks_status=tracks_status />
            <BenefitsSection />
            <HowItWorksSection />
            <WaitlistSection on_join=on_join tracks_status=tracks_status />
            <Footer />

            <AuthModal
                is_open=show_auth.into()
                on_close=Callback::new(move |_| show_auth.set(false))
                on_authenticated=on_authenticated
            />
            <WaitlistFormModal
                variant=form_variant
                is_open=show_form.into()
                on_close=Callback::new(move |_| show_form.set(false))
                on_success=on_joined
            />

            <NotificationsContainer />
        </div>
    }
}
