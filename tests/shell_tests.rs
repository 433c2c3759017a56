use std::io::Cursor;

use rbank::ledger::bank::Bank;
use rbank::ledger::shell::Shell;
use rbank::ledger::BankProcessor;
use rust_decimal_macros::dec;

fn run_script(script: &str) -> (String, BankProcessor) {
    let mut output = Vec::new();
    let mut shell = Shell::new(
        BankProcessor::new(Bank::new()),
        Cursor::new(script.as_bytes()),
        &mut output,
    );
    shell.run().unwrap();
    let processor = shell.into_processor();
    (String::from_utf8(output).unwrap(), processor)
}

const REGISTER_ANA: &str = "nu\n111\nAna Silva\n01-01-1990\nRua A, 1\nnc\n111\n";

#[test]
fn registers_client_and_account() {
    let (output, processor) = run_script(&format!("{REGISTER_ANA}q\n"));

    assert!(output.contains("=== Client created successfully! ==="));
    assert!(output.contains("=== Account 1 created successfully! ==="));
    assert!(output.ends_with("Leaving the system. Goodbye!\n"));
    assert_eq!(processor.system().clients()[0].address, "Rua A, 1");
}

#[test]
fn deposit_withdraw_and_statement() {
    let script = format!("{REGISTER_ANA}d\n111\n1000\ns\n111\n600\ns\n111\n250.5\ne\n111\nq\n");
    let (output, processor) = run_script(&script);

    assert!(output.contains("=== Deposit completed successfully! ==="));
    assert!(output.contains("@@@ Amount 600 exceeds the withdrawal limit of 500 @@@"));
    assert!(output.contains("=== Withdrawal completed successfully! ==="));
    assert!(output.contains("Deposit:\tR$ 1000.00"));
    assert!(output.contains("Withdrawal:\tR$ 250.50"));
    assert!(output.contains("Balance:\tR$ 749.50"));
    assert_eq!(
        processor.system().primary_account("111").unwrap().balance(),
        dec!(749.5)
    );
}

#[test]
fn empty_statement() {
    let (output, _) = run_script(&format!("{REGISTER_ANA}e\n111\nq\n"));

    assert!(output.contains("No transactions were made."));
    assert!(output.contains("Balance:\tR$ 0.00"));
}

#[test]
fn unknown_client_is_reported() {
    let (output, _) = run_script("d\n999\ns\n999\ne\n999\nq\n");

    assert_eq!(
        output.matches("@@@ Client or account not found. @@@").count(),
        3
    );
}

#[test]
fn client_without_account_is_reported() {
    let (output, _) = run_script("nu\n111\nAna\n01-01-1990\nRua A\nd\n111\nq\n");

    assert!(output.contains("@@@ Client or account not found. @@@"));
}

#[test]
fn duplicate_client_is_rejected_before_asking_details() {
    let (output, processor) = run_script(&format!("{REGISTER_ANA}nu\n111\nq\n"));

    assert!(output.contains("@@@ A client with this tax id already exists! @@@"));
    assert_eq!(processor.system().clients().len(), 1);
}

#[test]
fn new_account_for_unknown_client() {
    let (output, processor) = run_script("nc\n404\nq\n");

    assert!(output.contains("@@@ Client not found! @@@"));
    assert!(processor.system().accounts().is_empty());
}

#[test]
fn invalid_amount_returns_to_menu() {
    let (output, processor) = run_script(&format!("{REGISTER_ANA}d\n111\nabc\nq\n"));

    assert!(output.contains("@@@ Invalid amount: abc @@@"));
    assert!(processor
        .system()
        .primary_account("111")
        .unwrap()
        .history()
        .is_empty());
}

#[test]
fn lists_accounts() {
    let script = format!(
        "{REGISTER_ANA}nu\n222\nBruno Lima\n02-02-1985\nRua B, 2\nnc\n222\nlc\nq\n"
    );
    let (output, _) = run_script(&script);

    let rule = "=".repeat(100);
    assert_eq!(output.matches(&rule).count(), 2);
    assert!(output.contains("Branch:\t\t0001\nAccount:\t1\nHolder:\t\tAna Silva"));
    assert!(output.contains("Branch:\t\t0001\nAccount:\t2\nHolder:\t\tBruno Lima"));
}

#[test]
fn listing_with_no_accounts() {
    let (output, _) = run_script("lc\nq\n");

    assert!(output.contains("No accounts registered."));
}

#[test]
fn unknown_option_keeps_loop_running() {
    let (output, _) = run_script("zz\nlc\nq\n");

    assert!(output.contains("@@@ Invalid option, please select again. @@@"));
    assert!(output.contains("No accounts registered."));
}

#[test]
fn end_of_input_behaves_like_quit() {
    let (output, _) = run_script("nu\n111\nAna");

    assert!(output.ends_with("Leaving the system. Goodbye!\n"));
}

#[test]
fn deposit_overflowing_balance_is_reported() {
    let script = format!("{REGISTER_ANA}d\n111\n79228162514264337593543950335\nd\n111\n1\ne\n111\nq\n");
    let (output, processor) = run_script(&script);

    assert!(output.contains("@@@ Amount 1 would overflow the account balance @@@"));
    assert!(output.ends_with("Leaving the system. Goodbye!\n"));
    let account = processor.system().primary_account("111").unwrap();
    assert_eq!(account.balance(), rust_decimal::Decimal::MAX);
    assert_eq!(
        account.history().transactions(),
        &[rbank::ledger::transaction::Transaction::Deposit {
            amount: rust_decimal::Decimal::MAX
        }]
    );
}

#[test]
fn amount_with_too_many_digits_is_invalid() {
    let digits = "12345678901234567890123456789012345";
    let (output, processor) = run_script(&format!("{REGISTER_ANA}d\n111\n{digits}\nq\n"));

    assert!(output.contains(&format!("@@@ Invalid amount: {digits} @@@")));
    let account = processor.system().primary_account("111").unwrap();
    assert!(account.history().is_empty());
    assert_eq!(account.balance(), dec!(0));
}
