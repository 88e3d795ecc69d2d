use api::{ImageUpload, NewMember, Position};
use dioxus::prelude::*;

/// Form for adding a member.
///
/// Hands the filled-in [`NewMember`] to `on_submit`; the page owns the request
/// and closes the dialog once the server accepts it. Until then the inputs keep
/// their values so a rejected submission can be corrected.
#[component]
pub fn AddMemberDialog(on_submit: EventHandler<NewMember>, on_cancel: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut position = use_signal(String::new);
    let mut research = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut image = use_signal(|| Option::<ImageUpload>::None);

    let pick_image = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            image.set(None);
            return;
        };
        match file.read_bytes().await {
            Ok(bytes) => image.set(Some(ImageUpload {
                file_name: file.name(),
                content_type: file.content_type(),
                bytes: bytes.to_vec(),
            })),
            Err(e) => {
                tracing::error!("Failed to read image {}: {}", file.name(), e);
                image.set(None);
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if position().is_empty() {
            return;
        }
        let member = NewMember {
            name: name(),
            position: Position::parse(&position()),
            research: research(),
            email: email(),
            image: image(),
        };
        on_submit.call(member);
    };

    rsx! {
        div {
            class: "dialog",
            h3 { class: "dialog-title", "Add Member" }
            form {
                class: "dialog-form",
                onsubmit: handle_submit,

                div {
                    class: "dialog-field",
                    label { r#for: "member-name", "Name *" }
                    input {
                        id: "member-name",
                        name: "name",
                        r#type: "text",
                        required: true,
                        placeholder: "Enter a name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }

                div {
                    class: "dialog-field",
                    label { r#for: "member-position", "Position *" }
                    select {
                        id: "member-position",
                        name: "position",
                        required: true,
                        value: position(),
                        onchange: move |evt| position.set(evt.value()),
                        option { value: "", "Select a position" }
                        for choice in Position::selectable() {
                            option {
                                key: "{choice}",
                                value: "{choice}",
                                "{choice}"
                            }
                        }
                    }
                }

                div {
                    class: "dialog-field",
                    label { r#for: "member-research", "Research *" }
                    input {
                        id: "member-research",
                        name: "research",
                        r#type: "text",
                        required: true,
                        placeholder: "Enter a research area",
                        value: research(),
                        oninput: move |evt: FormEvent| research.set(evt.value()),
                    }
                }

                div {
                    class: "dialog-field",
                    label { r#for: "member-email", "Email *" }
                    input {
                        id: "member-email",
                        name: "email",
                        r#type: "email",
                        required: true,
                        placeholder: "Enter an email address",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    class: "dialog-field",
                    label { r#for: "member-image", "Profile image" }
                    input {
                        id: "member-image",
                        name: "image",
                        r#type: "file",
                        accept: "image/*",
                        onchange: pick_image,
                    }
                }

                div {
                    class: "dialog-actions",
                    button {
                        r#type: "button",
                        class: "button button-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "button button-primary",
                        "Add"
                    }
                }
            }
        }
    }
}
