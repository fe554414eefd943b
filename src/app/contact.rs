use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};

use crate::contact::{ContactForm, Field, HttpRelay, Relay, SubmissionStatus};
use crate::content::EMAIL;

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-slate-300 dark:border-slate-700 bg-transparent focus:outline-none focus:ring-2 focus:ring-cyan-500 transition-all duration-200";

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let relay = StoredValue::new_local(HttpRelay::default());

    let value_of = move |field: Field| move || form.with(|f| f.fields().get(field).to_string());
    let set_field = move |field: Field| {
        move |ev: Event| {
            let value = event_target_value(&ev);
            form.update(|f| f.update_field(field, value));
        }
    };
    let submitting = move || form.with(|f| f.is_submitting());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut pending = None;
        form.update(|f| pending = f.begin_submit());
        let Some(submission) = pending else {
            return;
        };
        let relay = relay.get_value();
        let attempt = submission.attempt;

        set_timeout(
            move || {
                form.try_update(|f| f.expire(attempt));
            },
            relay.config().timeout,
        );
        spawn_local(async move {
            let outcome = relay.send(&submission.fields).await;
            form.try_update(|f| f.complete(attempt, outcome));
        });
    };

    view! {
        <section id="contact" class="flex justify-center py-16 section-content">
            <div class="w-full max-w-2xl">
                <h2 class="text-2xl font-bold mb-4 text-center">"Contact"</h2>
                <p class="mb-8 text-center">
                    "Have a question, a project or just want to say hi? Drop me a line below or email "
                    <a href=format!("mailto:{EMAIL}") class="text-cyan-700 dark:text-cyan-400">
                        {EMAIL}
                    </a> "."
                </p>
                <form class="flex flex-col gap-4" on:submit=on_submit>
                    <label class="flex flex-col gap-1">
                        <span class="font-medium">"Name"</span>
                        <input
                            type="text"
                            name="name"
                            required
                            class=INPUT_CLASS
                            prop:value=value_of(Field::Name)
                            on:input=set_field(Field::Name)
                        />
                    </label>
                    <label class="flex flex-col gap-1">
                        <span class="font-medium">"Email"</span>
                        <input
                            type="email"
                            name="email"
                            required
                            class=INPUT_CLASS
                            prop:value=value_of(Field::Email)
                            on:input=set_field(Field::Email)
                        />
                    </label>
                    <label class="flex flex-col gap-1">
                        <span class="font-medium">"Message"</span>
                        <textarea
                            name="message"
                            rows="5"
                            required
                            class=INPUT_CLASS
                            prop:value=value_of(Field::Message)
                            on:input=set_field(Field::Message)
                        ></textarea>
                    </label>
                    <button
                        type="submit"
                        disabled=submitting
                        class="self-start px-6 py-3 rounded-md font-medium bg-cyan-600 text-white hover:bg-cyan-700 disabled:opacity-50 disabled:cursor-not-allowed transition-all duration-200"
                    >
                        {move || if submitting() { "Sending..." } else { "Send message" }}
                    </button>
                    <StatusLine status=Signal::derive(move || form.with(|f| f.status())) />
                </form>
            </div>
        </section>
    }
}

#[component]
fn StatusLine(status: Signal<SubmissionStatus>) -> impl IntoView {
    move || match status.get() {
        SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        SubmissionStatus::Success => Some(
            view! {
                <p role="status" class="text-green-700 dark:text-green-400">
                    "Thanks! Your message is on its way."
                </p>
            }
            .into_any(),
        ),
        SubmissionStatus::Error => Some(
            view! {
                <p role="alert" class="text-red-700 dark:text-red-400">
                    "Something went wrong sending your message. Please try again."
                </p>
            }
            .into_any(),
        ),
    }
}
