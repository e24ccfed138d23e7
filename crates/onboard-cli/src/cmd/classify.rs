use crate::output::print_json;
use onboard_core::age::IssueAge;
use onboard_core::message::progress_comment;
use onboard_core::progress::{classify, ProgressAction};
use serde::Serialize;

#[derive(Serialize)]
struct Classification {
    age: IssueAge,
    #[serde(skip_serializing_if = "Option::is_none")]
    decision: Option<ProgressAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

pub fn run(days: i64, project: &str, show_comment: bool, json: bool) -> anyhow::Result<()> {
    let age = IssueAge::from_days(days);
    let decision = classify(age);
    let comment = decision
        .as_ref()
        .map(|d| progress_comment(age, d, project));

    if json {
        return print_json(&Classification {
            age,
            decision,
            comment,
        });
    }

    println!(
        "Age:     {} months, {} weeks, {} days",
        age.months, age.weeks, age.days
    );
    match &decision {
        None => println!("Action:  none (under the three-month threshold)"),
        Some(d) => {
            println!("Label:   {}", d.label);
            println!("Action:  {}", d.action);
            if let Some(week) = d.week_in_month {
                println!("Week:    {week} of month 11");
            }
            if let Some(day) = d.day_in_week {
                println!("Day:     {day} of week");
            }
        }
    }
    if show_comment {
        if let Some(comment) = &comment {
            println!();
            println!("{comment}");
        }
    }
    Ok(())
}
