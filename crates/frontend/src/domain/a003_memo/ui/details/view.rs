use super::view_model::MemoDetailsViewModel;
use crate::domain::{a001_customer, a002_tag};
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::inline_create::{InlineCreateSelect, SelectField};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn MemoDetails() -> impl IntoView {
    let vm = MemoDetailsViewModel::new();
    vm.load();

    view! {
        <div class="details-container memo-details">
            <div class="details-header">
                <h3>"New memo"</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form
                class="details-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.save_command();
                }
            >
                <Input
                    label="Title"
                    name="title"
                    value=vm.title
                    on_input=Callback::new(move |v: String| vm.title.set(v))
                    required=true
                />
                <Textarea
                    label="Description"
                    name="description"
                    value=vm.description
                    on_input=Callback::new(move |v: String| vm.description.set(v))
                />
                <InlineCreateSelect
                    field=vm.customer
                    label="Customer"
                    dialog_title="New customer"
                    target_url=a001_customer::ui::create_url()
                    form_fields=a001_customer::ui::CREATE_FORM
                />
                <InlineCreateSelect
                    field=vm.tags
                    label="Tags"
                    dialog_title="New tag"
                    target_url=a002_tag::ui::create_url()
                    form_fields=a002_tag::ui::CREATE_FORM
                />

                <div class="details-actions">
                    <Button button_type="submit" disabled=vm.saving>
                        "Save"
                    </Button>
                </div>
            </form>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=60.0>"#"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>"Title"</TableHeaderCell>
                        <TableHeaderCell min_width=150.0>"Customer"</TableHeaderCell>
                        <TableHeaderCell min_width=150.0>"Tags"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        vm.memos
                            .get()
                            .into_iter()
                            .map(|memo| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{memo.id}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{memo.title}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {label_of(vm.customer, memo.customer_id)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {memo
                                                    .tag_ids
                                                    .into_iter()
                                                    .map(|id| view! {
                                                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                                            {label_of(vm.tags, Some(id))}
                                                        </Badge>
                                                    })
                                                    .collect_view()}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

/// Option label of a record id; the id itself when the option is not loaded.
fn label_of(field: RwSignal<SelectField>, id: Option<i32>) -> String {
    let Some(id) = id else {
        return String::new();
    };
    let value = id.to_string();
    field
        .with_untracked(|f| {
            f.options()
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.label.clone())
        })
        .unwrap_or(value)
}
