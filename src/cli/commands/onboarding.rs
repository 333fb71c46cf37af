//! First-run wizard: collects the profile that every metric hangs off.

use bolso_domain::{FixedExpense, UserProfile};

use crate::{
    app::AppState,
    cli::{forms, output},
    errors::AppError,
};

pub fn run(state: &mut AppState) -> Result<(), AppError> {
    output::section("Bem-vindo ao Bolso");
    output::info("Vamos configurar seu perfil para começar.");

    let name = forms::input_text("Seu nome")?;
    let salary = forms::input_amount("Salário mensal (R$)")?;
    let mut profile = UserProfile::new(name, salary);

    while forms::confirm("Adicionar uma conta fixa mensal?")? {
        let name = forms::input_text("Nome da conta")?;
        let amount = forms::input_amount("Valor (R$)")?;
        profile.fixed_expenses.push(FixedExpense::new(name, amount));
    }

    state.onboard(profile)?;
    output::success("Perfil criado. Bons gastos!");
    Ok(())
}
