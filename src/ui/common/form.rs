use leptos::prelude::*;

fn field_label(label: &'static str, required: Signal<bool>) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-gray-700">
            {label}
            {move || required.get().then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
        </label>
    }
}

/// Labelled text input
#[component]
pub fn FormField(
    label: &'static str,
    /// Shows a red asterisk
    #[prop(into, default = Signal::stored(false))]
    required: Signal<bool>,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = "off")]
    autocomplete: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {field_label(label, required)}
            <input
                type=input_type
                class="input-base"
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Labelled multi-line input
#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(into, default = Signal::stored(false))]
    required: Signal<bool>,
    #[prop(default = "")]
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = 3)]
    rows: u32,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {field_label(label, required)}
            <textarea
                class="input-base resize-none"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Labelled select with an empty placeholder option
#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(into, default = Signal::stored(false))]
    required: Signal<bool>,
    #[prop(default = "Select an option")]
    placeholder: &'static str,
    value: Signal<String>,
    on_change: Callback<String>,
    /// `(value, label)` pairs
    options: &'static [(&'static str, &'static str)],
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {field_label(label, required)}
            <select
                class="select-base"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <option value="" disabled=true>{placeholder}</option>
                {options.iter().map(|(val, text)| {
                    view! { <option value=*val>{*text}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}
