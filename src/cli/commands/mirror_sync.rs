//! Synchronisation with the optional remote mirror.
//!
//! Local state is authoritative: a push makes the mirror match the local
//! snapshot, a pull replaces the local snapshot with the remote one. Failures
//! surface to the user and nothing is retried.

use std::collections::HashSet;

use bolso_config::Config;
use bolso_domain::{Ledger, UserProfile};
use bolso_mirror::{ExpenseRow, FixedExpenseRow, GoalRow, MirrorClient, ProfileRow, Session};

use crate::{
    app::AppState,
    cli::{forms, output},
    errors::AppError,
};

pub fn synchronize(state: &mut AppState, config: &Config) -> Result<(), AppError> {
    let Some(settings) = &config.mirror else {
        output::warn("Espelho remoto não configurado (defina `mirror` no config.json).");
        return Ok(());
    };
    state.require_ledger()?;

    let client = MirrorClient::new(settings.url.clone(), settings.api_key.clone())?;
    let email = forms::input_text("E-mail")?;
    let password = forms::input_password("Senha")?;
    let session = match forms::select("Conta", &["Entrar", "Criar conta"])? {
        1 => client.sign_up(&email, &password)?,
        _ => client.sign_in(&email, &password)?,
    };
    let user_id = session.user.id.clone();

    let result = match forms::select(
        "Sincronização",
        &["Enviar dados locais", "Baixar dados remotos", "Cancelar"],
    )? {
        0 => push(state, &client, &session, &user_id, &email),
        1 => pull(state, &client, &session, &user_id),
        _ => Ok(()),
    };

    client.sign_out(&session)?;
    result
}

fn push(
    state: &AppState,
    client: &MirrorClient,
    session: &Session,
    user_id: &str,
    email: &str,
) -> Result<(), AppError> {
    let ledger = state.require_ledger()?;

    let profile_row = ProfileRow::from_profile(user_id, email, &ledger.profile);
    if client.get_profile(session, user_id)?.is_some() {
        client.update_profile(session, user_id, &profile_row)?;
    } else {
        client.create_profile(session, &profile_row)?;
    }

    // fixed expenses have positional identity, so the remote set is replaced
    for row in client.list_fixed_expenses(session, user_id)? {
        if let Some(id) = row.id {
            client.delete_fixed_expense(session, &id)?;
        }
    }
    for expense in &ledger.profile.fixed_expenses {
        client.create_fixed_expense(session, &FixedExpenseRow::from_expense(user_id, expense))?;
    }

    // transactions and goals reconcile by id
    let remote_expenses = client.list_expenses(session, user_id, None, None)?;
    let local_ids: HashSet<String> = ledger
        .transactions
        .iter()
        .map(|txn| txn.id.to_string())
        .collect();
    for row in &remote_expenses {
        if let Some(id) = &row.id {
            if !local_ids.contains(id) {
                client.delete_expense(session, id)?;
            }
        }
    }
    let remote_ids: HashSet<String> = remote_expenses
        .iter()
        .filter_map(|row| row.id.clone())
        .collect();
    for txn in &ledger.transactions {
        if !remote_ids.contains(&txn.id.to_string()) {
            client.create_expense(session, &ExpenseRow::from_transaction(user_id, txn))?;
        }
    }

    let remote_goals = client.list_goals(session, user_id)?;
    let local_goal_ids: HashSet<String> =
        ledger.goals.iter().map(|goal| goal.id.to_string()).collect();
    for row in &remote_goals {
        if let Some(id) = &row.id {
            if !local_goal_ids.contains(id) {
                client.delete_goal(session, id)?;
            }
        }
    }
    let remote_goal_ids: HashSet<String> = remote_goals
        .iter()
        .filter_map(|row| row.id.clone())
        .collect();
    for goal in &ledger.goals {
        let row = GoalRow::from_goal(user_id, goal);
        if remote_goal_ids.contains(&goal.id.to_string()) {
            client.update_goal(session, &goal.id.to_string(), &row)?;
        } else {
            client.create_goal(session, &row)?;
        }
    }

    tracing::info!("mirror push complete");
    output::success("Dados locais enviados ao espelho.");
    Ok(())
}

fn pull(
    state: &mut AppState,
    client: &MirrorClient,
    session: &Session,
    user_id: &str,
) -> Result<(), AppError> {
    let Some(profile_row) = client.get_profile(session, user_id)? else {
        output::warn("Nenhum perfil no espelho para este usuário.");
        return Ok(());
    };

    let mut profile = UserProfile::new(profile_row.name, profile_row.salary);
    profile.fixed_expenses = client
        .list_fixed_expenses(session, user_id)?
        .into_iter()
        .map(FixedExpenseRow::into_expense)
        .collect();

    let transactions = client
        .list_expenses(session, user_id, None, None)?
        .into_iter()
        .map(ExpenseRow::into_transaction)
        .collect::<Result<Vec<_>, _>>()?;
    let goals = client
        .list_goals(session, user_id)?
        .into_iter()
        .map(GoalRow::into_goal)
        .collect::<Result<Vec<_>, _>>()?;

    state.replace_ledger(Ledger::from_parts(profile, transactions, goals))?;
    tracing::info!("mirror pull applied");
    output::success("Dados remotos aplicados localmente.");
    Ok(())
}
