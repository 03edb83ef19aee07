// src/specs/card.rs
//
// Card page (and its two error variants) of the gift-card portal.
//
// Shape:
//   <span id="ctl00_DefaultContent_lblMembershipNumber">…</span>  (x7 labels)
//   <table id="dgPointsStatement"><tbody>
//     <tr> header </tr>
//     <tr><td>date</td><td>details</td><td>description</td><td>amount</td><td>balance</td></tr>
//   </tbody></table>
//
// Login rejected:  <td id="htmltdErrorDescription">Invalid card number or password.</td>
// Site error:      <div class="content-error"><h3>…</h3></div>

use scraper::{Html, Selector};

use super::{Page, PageParser};
use crate::card::{Card, Transaction};
use crate::core::html::{cell_text, exists, first_text};

#[derive(Clone, Copy, Debug, Default)]
pub struct CardPage;

impl PageParser for CardPage {
    fn parse(&self, html: &str) -> Page {
        parse_doc(&Html::parse_document(html))
    }
}

pub fn parse_doc(doc: &Html) -> Page {
    if let Some(msg) = first_text(doc, selector!("#htmltdErrorDescription")) {
        return Page::AuthError(msg);
    }
    if exists(doc, selector!(".content-error h3")) {
        return Page::AppError;
    }
    Page::Card(extract_card(doc))
}

/// Summary labels + statement. Missing labels stay empty.
pub fn extract_card(doc: &Html) -> Card {
    let label = |sel: &Selector| first_text(doc, sel).unwrap_or_default();

    Card {
        card_no: label(selector!("#ctl00_DefaultContent_lblMembershipNumber")),
        account_no: label(selector!("#ctl00_DefaultContent_lblAccountNumber")),
        loads_to_date: label(selector!("#ctl00_DefaultContent_lblcardvalue")),
        purchases_to_date: label(selector!("#ctl00_DefaultContent_lblpurchasestodate")),
        available_balance: label(selector!("#ctl00_DefaultContent_lblavailablebalance")),
        purchased_date: label(selector!("#ctl00_DefaultContent_lblCardPurchasedDate")),
        expiry_date: label(selector!("#ctl00_DefaultContent_lblCardExpiryDate")),
        transactions: extract_transactions(doc),
    }
}

/// Rows of every `#dgPointsStatement tbody`, header row of each skipped.
pub fn extract_transactions(doc: &Html) -> Vec<Transaction> {
    let tr = selector!("tr");
    let td = selector!("td");

    let mut out = Vec::new();
    for tbody in doc.select(selector!("#dgPointsStatement tbody")) {
        for row in tbody.select(tr).skip(1) {
            out.push(Transaction {
                date: cell_text(row, td, 0),
                details: cell_text(row, td, 1),
                description: cell_text(row, td, 2),
                amount: cell_text(row, td, 3),
                balance: cell_text(row, td, 4),
            });
        }
    }
    out
}
