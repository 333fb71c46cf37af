//! Savings-goal management.

use bolso_core::{format::format_brl, Clock};
use bolso_domain::Goal;
use uuid::Uuid;

use crate::{
    app::AppState,
    cli::{forms, output},
    errors::AppError,
};

pub fn manage(state: &mut AppState, clock: &dyn Clock) -> Result<(), AppError> {
    loop {
        let choice = forms::select(
            "Metas",
            &[
                "Listar metas",
                "Nova meta",
                "Atualizar progresso",
                "Excluir meta",
                "Voltar",
            ],
        )?;
        match choice {
            0 => list(state, clock)?,
            1 => create(state, clock)?,
            2 => update_progress(state)?,
            3 => remove(state)?,
            _ => break,
        }
    }
    Ok(())
}

fn list(state: &AppState, clock: &dyn Clock) -> Result<(), AppError> {
    let ledger = state.require_ledger()?;
    if ledger.goals.is_empty() {
        output::info("Nenhuma meta cadastrada.");
        return Ok(());
    }
    for goal in &ledger.goals {
        let ratio = goal.progress_ratio();
        println!(
            "{:<24} {} de {}  {}  {:.0}%",
            goal.name,
            format_brl(goal.current_amount),
            format_brl(goal.target_amount),
            output::scaled_bar(ratio, 1.0, 20),
            ratio * 100.0
        );
        let days = goal.days_left(clock.today());
        output::info(&if days > 0 {
            format!("{days} dias restantes")
        } else {
            "Prazo vencido".to_string()
        });
    }
    Ok(())
}

fn create(state: &mut AppState, clock: &dyn Clock) -> Result<(), AppError> {
    let name = forms::input_text("Nome da meta")?;
    let target = forms::input_amount("Valor alvo (R$)")?;
    let deadline = forms::input_date("Prazo", clock.today())?;
    state.add_goal(Goal::new(name, target, deadline))?;
    output::success("Meta criada!");
    Ok(())
}

fn update_progress(state: &mut AppState) -> Result<(), AppError> {
    let Some(id) = pick_goal(state, "Qual meta atualizar?")? else {
        return Ok(());
    };
    let amount = forms::input_non_negative("Valor acumulado (R$)")?;
    state.set_goal_amount(id, amount)?;
    output::success("Progresso atualizado.");
    Ok(())
}

fn remove(state: &mut AppState) -> Result<(), AppError> {
    let Some(id) = pick_goal(state, "Qual meta excluir?")? else {
        return Ok(());
    };
    if forms::confirm("Confirmar exclusão?")? {
        state.delete_goal(id)?;
        output::success("Meta excluída.");
    }
    Ok(())
}

fn pick_goal(state: &AppState, prompt: &str) -> Result<Option<Uuid>, AppError> {
    let ledger = state.require_ledger()?;
    if ledger.goals.is_empty() {
        output::info("Nenhuma meta cadastrada.");
        return Ok(None);
    }
    let rows: Vec<String> = ledger
        .goals
        .iter()
        .map(|goal| {
            format!(
                "{} ({} de {})",
                goal.name,
                format_brl(goal.current_amount),
                format_brl(goal.target_amount)
            )
        })
        .collect();
    let ids: Vec<Uuid> = ledger.goals.iter().map(|goal| goal.id).collect();
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let index = forms::select(prompt, &refs)?;
    Ok(Some(ids[index]))
}
