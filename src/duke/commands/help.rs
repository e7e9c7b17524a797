pub const GREETING: &str = "Hi! I'm Duke! Pleasure to meet you :)";
pub const FAREWELL: &str = "Bye! Hope to see you again soon!";
pub const EMPTY_INPUT: &str = "Please provide an input!";

pub const USAGE: &str = "Accepted commands:
hello - hello!
list - show current list
help - show this message
bye - saves the current list and exits the program

todo <description> - create a todo Task
event <description> /at <dd/MM/yyyy> - create an event Task (date is optional)
deadline <description> /by <dd/MM/yyyy> - create a deadline Task (date is optional)

done <index> - mark the specified task as done
undo <index> - mark the specified task as not done
delete <index> - deletes the specified task from the list
find <word> - list the tasks whose description contains the word";

/// The message for a line nothing in the command table matched.
pub fn not_understood(line: &str) -> String {
    format!(
        "Sorry, I did not understand: {}\nUse \"help\" to look at available commands.",
        line
    )
}
