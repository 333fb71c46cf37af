//! Expense registration and deletion.

use bolso_core::{
    format::{format_brl, format_date},
    Clock,
};
use bolso_domain::Transaction;
use uuid::Uuid;

use crate::{
    app::AppState,
    cli::{forms, output},
    errors::AppError,
};

pub fn register(state: &mut AppState, clock: &dyn Clock) -> Result<(), AppError> {
    state.require_ledger()?;

    let category = forms::select_category("Categoria")?;
    // an empty description falls back to the category label
    let description = forms::input_text_with_default("Descrição", category.label())?;
    let amount = forms::input_amount("Valor (R$)")?;
    let date = forms::input_date("Data", clock.today())?;

    let instant = if date == clock.today() {
        clock.now()
    } else {
        date.and_hms_opt(12, 0, 0).unwrap()
    };
    state.add_expense(Transaction::new(description, amount, instant, category))?;
    output::success("Gasto registrado!");
    Ok(())
}

pub fn delete(state: &mut AppState) -> Result<(), AppError> {
    let (rows, ids) = {
        let ledger = state.require_ledger()?;
        if ledger.transactions.is_empty() {
            output::info("Nenhum gasto para excluir.");
            return Ok(());
        }
        let rows: Vec<String> = ledger
            .transactions
            .iter()
            .take(20)
            .map(|txn| {
                format!(
                    "{}  {:<30} {}",
                    format_date(txn.date.date()),
                    txn.description,
                    format_brl(txn.amount)
                )
            })
            .collect();
        let ids: Vec<Uuid> = ledger.transactions.iter().take(20).map(|txn| txn.id).collect();
        (rows, ids)
    };

    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let index = forms::select("Qual gasto excluir?", &refs)?;
    if forms::confirm("Confirmar exclusão?")? {
        state.delete_expense(ids[index])?;
        output::success("Gasto excluído.");
    }
    Ok(())
}
