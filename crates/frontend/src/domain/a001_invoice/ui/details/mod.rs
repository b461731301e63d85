use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_invoice::Invoice;
use leptos::prelude::*;

/// Read-only card of one invoice with its product lines
#[component]
pub fn InvoiceDetails(invoice: Invoice, on_close: Callback<()>) -> impl IntoView {
    let title = format!("Invoice {}", invoice.customer_receipt_no);
    let total = invoice.total_amount();

    let summary = [
        ("Serial Number", invoice.customer_receipt_no.clone()),
        ("Business Name", invoice.business_name.clone()),
        ("Seller Name", invoice.name.clone()),
        ("Address", invoice.address.clone()),
        ("Customer Name", invoice.customer_name.clone()),
        ("Date", invoice.date.clone()),
    ]
    .into_iter()
    .map(|(label, value)| {
        view! {
            <p><strong>{label}": "</strong>{value}</p>
        }
    })
    .collect_view();

    let product_rows = invoice
        .products
        .into_iter()
        .map(|product| {
            view! {
                <tr>
                    <td>{product.product_name}</td>
                    <td class="text-right">{product.quantity.to_string()}</td>
                    <td class="text-right">{product.total_price.to_string()}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <ModalFrame title=title on_close=on_close modal_class="invoice-details".to_string()>
            {summary}
            <h3>"Products"</h3>
            <table class="product-table">
                <thead>
                    <tr>
                        <th>"Product Name"</th>
                        <th>"Quantity"</th>
                        <th>"Total Price"</th>
                    </tr>
                </thead>
                <tbody>{product_rows}</tbody>
                <tfoot>
                    <tr>
                        <td colspan="2"><strong>"Total"</strong></td>
                        <td class="text-right"><strong>{total.to_string()}</strong></td>
                    </tr>
                </tfoot>
            </table>
        </ModalFrame>
    }
}
