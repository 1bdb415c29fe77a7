//! Waitlist questionnaire modal
//!
//! One component for every [`FormVariant`]. The staged variant paginates the
//! questions over three pages with a progress bar; the single-page variants
//! render everything at once.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::content::STAGED_STEP_INTROS;
use crate::core::form::select_options;
use crate::core::{FormController, FormVariant, Notification, WaitlistField};
use crate::ui::common::{BaseModal, FormField, LoadingButton, SelectField, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;
use crate::ui::session::use_session_context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Email,
    TextArea,
    Select,
}

fn field_kind(field: WaitlistField) -> FieldKind {
    match field {
        WaitlistField::Email => FieldKind::Email,
        WaitlistField::FirstTask | WaitlistField::PainPoints => FieldKind::TextArea,
        WaitlistField::EntryType
        | WaitlistField::PrimaryUseCase
        | WaitlistField::CompanySize
        | WaitlistField::HowDidYouHear
        | WaitlistField::MonthlyBudget
        | WaitlistField::Urgency => FieldKind::Select,
        WaitlistField::FullName
        | WaitlistField::Company
        | WaitlistField::JobTitle
        | WaitlistField::CurrentTools => FieldKind::Text,
    }
}

/// Question shown above an input
pub fn field_question(variant: FormVariant, field: WaitlistField) -> &'static str {
    match (variant, field) {
        (FormVariant::Typed, WaitlistField::JobTitle) => "Job Role",
        (FormVariant::Typed, WaitlistField::MonthlyBudget) => "Monthly Budget (₹)",
        (FormVariant::Compact, WaitlistField::Company) => "Company/Individual",
        (_, WaitlistField::FirstTask) => "What's the first task you'd want to automate?",
        (_, WaitlistField::PainPoints) => "What are your biggest workflow pain points?",
        (_, WaitlistField::HowDidYouHear) => "How did you hear about us?",
        (_, WaitlistField::MonthlyBudget) => "Monthly Budget Range",
        (_, WaitlistField::Urgency) => "How urgently do you need this solution?",
        (_, field) => field.label(),
    }
}

fn field_placeholder(field: WaitlistField) -> &'static str {
    match field {
        WaitlistField::FullName => "Your full name",
        WaitlistField::Email => "you@example.com",
        WaitlistField::Company => "Your company name",
        WaitlistField::JobTitle => "Your role",
        WaitlistField::EntryType => "Select one",
        WaitlistField::PrimaryUseCase => "Select your main use case",
        WaitlistField::CompanySize => "Select company size",
        WaitlistField::FirstTask => {
            "Describe the specific workflow or task you'd like to automate first"
        }
        WaitlistField::CurrentTools => "e.g., Slack, Notion, Gmail, Salesforce",
        WaitlistField::PainPoints => "Tell us about the challenges you face with current workflows",
        WaitlistField::HowDidYouHear => "Select an option",
        WaitlistField::MonthlyBudget => "Select budget range",
        WaitlistField::Urgency => "Select urgency level",
    }
}

/// Whether the email input shows the account email read-only
fn email_locked(variant: FormVariant) -> bool {
    variant.requires_identity()
}

/// Success toast after a submission
pub fn joined_notification() -> Notification {
    Notification::success(
        "Welcome to the waitlist! 🎉",
        "You'll receive updates about early access soon.",
    )
}

/// Input for one field, bound to the controller
fn field_input(controller: RwSignal<FormController>, field: WaitlistField) -> AnyView {
    let variant = controller.with_untracked(|c| c.variant());
    let label = field_question(variant, field);
    let placeholder = field_placeholder(field);
    let value = Signal::derive(move || controller.with(|c| c.field(field).to_string()));
    let required = Signal::derive(move || controller.with(|c| c.is_required(field)));
    let on_input = Callback::new(move |v: String| controller.update(|c| c.update_field(field, v)));

    match field_kind(field) {
        FieldKind::Select => view! {
            <SelectField
                label=label
                required=required
                placeholder=placeholder
                value=value
                on_change=on_input
                options=select_options(variant, field)
            />
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <TextAreaField
                label=label
                required=required
                placeholder=placeholder
                value=value
                on_input=on_input
            />
        }
        .into_any(),
        FieldKind::Email => view! {
            <FormField
                label=label
                required=required
                input_type="email"
                placeholder=placeholder
                autocomplete="email"
                value=value
                on_input=on_input
                disabled={email_locked(variant)}
            />
        }
        .into_any(),
        FieldKind::Text => view! {
            <FormField
                label=label
                required=required
                placeholder=placeholder
                value=value
                on_input=on_input
            />
        }
        .into_any(),
    }
}

#[component]
pub fn WaitlistFormModal(
    variant: FormVariant,
    is_open: Signal<bool>,
    on_close: Callback<()>,
    /// Runs once after a successful submission
    on_success: Callback<()>,
) -> impl IntoView {
    let session = use_session_context();
    let notifications = use_notifications();
    let controller = RwSignal::new(FormController::new(variant));

    // Fresh form with the account email on every open. A controller with a
    // pending submission is kept so its in-flight guard survives the reopen.
    Effect::new(move |_| {
        if !is_open.get() {
            return;
        }
        let identity = session.identity_untracked();
        if controller.with_untracked(|c| c.is_loading()) {
            controller.update(|c| c.prefill_identity(identity.as_ref()));
        } else {
            controller.set(FormController::for_identity(variant, identity.as_ref()));
        }
    });

    let current_step = Memo::new(move |_| controller.with(|c| c.current_step()));
    let step = Memo::new(move |_| controller.with(|c| c.step()));
    let can_advance = Memo::new(move |_| controller.with(|c| c.can_advance(c.current_step())));
    let is_final_step = Memo::new(move |_| controller.with(|c| c.is_final_step()));
    let loading = Memo::new(move |_| controller.with(|c| c.is_loading()));

    let close = Callback::new(move |_| {
        controller.update(|c| c.reset());
        on_close.run(());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Enter on an earlier page moves forward instead of submitting
        if !controller.with_untracked(|c| c.is_final_step()) {
            controller.update(|c| {
                if c.can_advance(c.current_step()) {
                    c.advance_step();
                }
            });
            return;
        }

        let identity = session.identity_untracked();
        let begun = controller.try_update(|c| c.begin_submit(identity.as_ref()));
        let submission = match begun {
            Some(Ok(submission)) => submission,
            Some(Err(err)) => {
                if let Some(notification) = err.notification() {
                    notifications.notify(notification);
                }
                return;
            }
            None => return,
        };

        let client = session.client();
        spawn_local(async move {
            let result = submission.send(&client).await;
            let finished = controller.try_update(|c| c.finish_submit(result));

            match finished {
                Some(Ok(())) => {
                    notifications.notify(joined_notification());
                    session.mark_registered(submission.record.email());
                    on_close.run(());
                    on_success.run(());
                }
                Some(Err(err)) => {
                    if let Some(notification) = err.notification() {
                        notifications.notify(notification);
                    }
                }
                // Form was unmounted while the request was pending
                None => {}
            }
        });
    };

    let title = Signal::stored("Join the Axiom Waitlist".to_string());

    view! {
        <BaseModal title=title is_open=is_open on_close=close max_width="max-w-2xl">
            <form on:submit=on_submit class="space-y-6">
                {move || step.get().map(|pointer| view! {
                    <div>
                        <div class="flex justify-between items-center mb-2 text-sm font-medium text-gray-600">
                            <span>{format!("Step {} of {}", pointer.current(), pointer.total())}</span>
                            <span>{format!("{}%", pointer.progress_percent())}</span>
                        </div>
                        <div class="w-full bg-gray-200 rounded-full h-2">
                            <div
                                class="bg-gradient-to-r from-emerald-500 to-blue-500 h-2 rounded-full transition-all duration-300"
                                style=format!("width: {}%", pointer.progress_percent())
                            ></div>
                        </div>
                    </div>
                })}

                {move || {
                    let page = current_step.get();
                    let intro = variant
                        .step_count()
                        .and_then(|_| STAGED_STEP_INTROS.get(usize::from(page).saturating_sub(1)));
                    let fields = variant.fields_for_step(page);

                    view! {
                        {intro.map(|intro| view! {
                            <div class="text-center">
                                <h4 class="text-2xl font-bold text-gray-900 mb-2">{intro.heading}</h4>
                                <p class="text-gray-600">{intro.lead}</p>
                            </div>
                        })}
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {fields.iter().map(|&field| {
                                let visible = Memo::new(move |_| {
                                    controller.with(|c| c.variant().is_visible(field, c.state()))
                                });
                                let wide = matches!(field_kind(field), FieldKind::TextArea);
                                view! {
                                    <Show when=move || visible.get()>
                                        <div class=if wide { "md:col-span-2" } else { "" }>
                                            {field_input(controller, field)}
                                        </div>
                                    </Show>
                                }
                            }).collect_view()}
                        </div>
                    }
                }}

                <div class="flex justify-between gap-4 pt-6 border-t border-gray-200">
                    {move || match step.get() {
                        Some(pointer) => view! {
                            <button
                                type="button"
                                class="btn-base btn-outline flex items-center gap-2"
                                disabled=pointer.is_first()
                                on:click=move |_| controller.update(|c| c.retreat_step())
                            >
                                <Icon name=icons::ARROW_LEFT class="w-4 h-4" />
                                <span>"Previous"</span>
                            </button>
                        }.into_any(),
                        None => view! {
                            <button
                                type="button"
                                class="btn-base btn-outline"
                                disabled=move || loading.get()
                                on:click=move |_| close.run(())
                            >
                                "Cancel"
                            </button>
                        }.into_any(),
                    }}

                    <Show
                        when=move || is_final_step.get()
                        fallback=move || view! {
                            <button
                                type="button"
                                class="btn-base bg-emerald-500 hover:bg-emerald-600 text-white flex items-center gap-2"
                                disabled=move || !can_advance.get()
                                on:click=move |_| controller.update(|c| c.advance_step())
                            >
                                <span>"Next"</span>
                                <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                            </button>
                        }
                    >
                        <LoadingButton
                            loading=loading.into()
                            text=Signal::stored("Join Waitlist".to_string())
                            loading_text=Signal::stored("Submitting...".to_string())
                            class="bg-emerald-500 hover:bg-emerald-600 text-white font-semibold px-6"
                        />
                    </Show>
                </div>
            </form>
        </BaseModal>
    }
}
