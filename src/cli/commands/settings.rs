//! Profile editing, fixed-expense editing, mirror sync, and full reset.

use bolso_config::Config;
use bolso_core::format::format_brl;
use bolso_domain::FixedExpense;

use crate::{
    app::AppState,
    cli::{commands::mirror_sync, forms, output},
    errors::AppError,
};

pub fn manage(state: &mut AppState, config: &Config) -> Result<(), AppError> {
    loop {
        let choice = forms::select(
            "Configurações",
            &[
                "Editar perfil",
                "Editar contas fixas",
                "Sincronizar com o espelho remoto",
                "Apagar todos os dados",
                "Voltar",
            ],
        )?;
        match choice {
            0 => edit_profile(state)?,
            1 => edit_fixed_expenses(state)?,
            2 => mirror_sync::synchronize(state, config)?,
            3 => {
                if forms::confirm("Isso apaga perfil, gastos e metas. Continuar?")? {
                    state.reset()?;
                    output::warn("Todos os dados foram apagados.");
                    return Ok(());
                }
            }
            _ => break,
        }
    }
    Ok(())
}

fn edit_profile(state: &mut AppState) -> Result<(), AppError> {
    let mut profile = state.require_ledger()?.profile.clone();
    profile.name = forms::input_text_with_default("Nome", &profile.name)?;
    profile.salary = forms::input_amount_with_default("Salário mensal (R$)", profile.salary)?;
    if forms::confirm("Alterar a imagem de perfil?")? {
        profile.profile_image = forms::input_optional("Referência da imagem")?;
    }
    state.set_profile(profile)?;
    output::success("Perfil atualizado.");
    Ok(())
}

/// Fixed expenses are replaced wholesale, matching their positional identity.
fn edit_fixed_expenses(state: &mut AppState) -> Result<(), AppError> {
    let current = &state.require_ledger()?.profile.fixed_expenses;
    if current.is_empty() {
        output::info("Nenhuma conta fixa cadastrada.");
    } else {
        for expense in current {
            output::key_value(&expense.name, &format_brl(expense.amount));
        }
    }

    let mut replacement = Vec::new();
    while forms::confirm("Adicionar uma conta fixa?")? {
        let name = forms::input_text("Nome da conta")?;
        let amount = forms::input_amount("Valor (R$)")?;
        replacement.push(FixedExpense::new(name, amount));
    }
    if forms::confirm(&format!(
        "Substituir a lista atual por {} conta(s)?",
        replacement.len()
    ))? {
        state.set_fixed_expenses(replacement)?;
        output::success("Contas fixas atualizadas.");
    }
    Ok(())
}
