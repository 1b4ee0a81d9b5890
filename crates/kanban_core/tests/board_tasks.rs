use chrono::NaiveDate;
use kanban_core::{
    BoardService, BoardServiceError, InMemoryBoardRepository, NewTask, Project, Task,
    TaskDetailsPatch, TaskId, TaskStatus,
};
use uuid::Uuid;

type Board = BoardService<InMemoryBoardRepository>;

fn board_with_project() -> (Board, Project) {
    let mut board = BoardService::new(InMemoryBoardRepository::new());
    let project = board.add_project("widget").unwrap();
    (board, project)
}

fn add(board: &mut Board, project: &Project, title: &str, status: TaskStatus) -> Task {
    board
        .add_task(NewTask::new(project.id, title, status))
        .unwrap()
}

fn column_titles(board: &Board, project: &Project, status: TaskStatus) -> Vec<String> {
    board
        .column(project.id, status)
        .into_iter()
        .map(|task| task.title)
        .collect()
}

fn assert_dense(board: &Board, project: &Project) {
    for status in TaskStatus::ALL {
        let orders: Vec<usize> = board
            .column(project.id, status)
            .iter()
            .map(|task| task.order)
            .collect();
        let expected: Vec<usize> = (0..orders.len()).collect();
        assert_eq!(orders, expected, "column {status} is not dense");
    }
}

#[test]
fn add_task_appends_dense_orders_per_column() {
    let (mut board, project) = board_with_project();

    let orders: Vec<usize> = (0..5)
        .map(|i| add(&mut board, &project, &format!("todo {i}"), TaskStatus::ToDo).order)
        .collect();
    let first_done = add(&mut board, &project, "done 0", TaskStatus::Done);

    assert_eq!(orders, vec![0, 1, 2, 3, 4]);
    assert_eq!(first_done.order, 0);
    assert_dense(&board, &project);
}

#[test]
fn add_task_trims_and_validates_input() {
    let (mut board, project) = board_with_project();

    let blank = board.add_task(NewTask::new(project.id, "  ", TaskStatus::ToDo));
    assert_eq!(blank.unwrap_err(), BoardServiceError::EmptyTitle);

    let orphan_project = Uuid::new_v4();
    let orphan = board.add_task(NewTask::new(orphan_project, "x", TaskStatus::ToDo));
    assert_eq!(
        orphan.unwrap_err(),
        BoardServiceError::ProjectNotFound(orphan_project)
    );

    let task = board
        .add_task(
            NewTask::new(project.id, "  Ship it  ", TaskStatus::InProgress)
                .with_description("   ")
                .with_due_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
                .with_image_url("data:image/png;base64,AAAA"),
        )
        .unwrap();
    assert_eq!(task.title, "Ship it");
    assert_eq!(task.description, None);
    assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 5, 1));
    assert_eq!(task.image_url.as_deref(), Some("data:image/png;base64,AAAA"));
    assert!(board.tasks_by_project(project.id).len() == 1);
}

#[test]
fn tasks_by_project_is_sorted_by_order_across_columns() {
    let (mut board, project) = board_with_project();
    let a = add(&mut board, &project, "a", TaskStatus::ToDo);
    add(&mut board, &project, "b", TaskStatus::ToDo);
    add(&mut board, &project, "c", TaskStatus::Done);
    board.move_task(a.id, TaskStatus::ToDo, 1).unwrap();

    let orders: Vec<usize> = board
        .tasks_by_project(project.id)
        .iter()
        .map(|task| task.order)
        .collect();

    assert_eq!(orders.len(), 3);
    assert!(orders.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn move_to_other_column_repacks_both_columns() {
    let (mut board, project) = board_with_project();
    add(&mut board, &project, "todo 0", TaskStatus::ToDo);
    add(&mut board, &project, "todo 1", TaskStatus::ToDo);
    let moving = add(&mut board, &project, "todo 2", TaskStatus::ToDo);
    add(&mut board, &project, "wip 0", TaskStatus::InProgress);
    add(&mut board, &project, "wip 1", TaskStatus::InProgress);

    let moved = board
        .move_task(moving.id, TaskStatus::InProgress, 0)
        .unwrap();

    assert_eq!(moved.from_status, TaskStatus::ToDo);
    assert_eq!(moved.to_order, 0);
    assert_eq!(
        column_titles(&board, &project, TaskStatus::ToDo),
        vec!["todo 0", "todo 1"]
    );
    assert_eq!(
        column_titles(&board, &project, TaskStatus::InProgress),
        vec!["todo 2", "wip 0", "wip 1"]
    );
    assert_eq!(board.task(moving.id).unwrap().status, TaskStatus::InProgress);
    assert_dense(&board, &project);
}

#[test]
fn move_from_middle_of_column_closes_gap() {
    let (mut board, project) = board_with_project();
    add(&mut board, &project, "a", TaskStatus::ToDo);
    let middle = add(&mut board, &project, "b", TaskStatus::ToDo);
    add(&mut board, &project, "c", TaskStatus::ToDo);

    board.move_task(middle.id, TaskStatus::Done, 0).unwrap();

    assert_eq!(column_titles(&board, &project, TaskStatus::ToDo), vec!["a", "c"]);
    assert_eq!(column_titles(&board, &project, TaskStatus::Done), vec!["b"]);
    assert_dense(&board, &project);
}

#[test]
fn moved_task_lands_at_requested_index() {
    let (mut board, project) = board_with_project();
    let ids: Vec<TaskId> = ["a", "b", "c", "d"]
        .iter()
        .map(|title| add(&mut board, &project, title, TaskStatus::ToDo).id)
        .collect();

    for (task_index, target) in [(0usize, 3usize), (3, 0), (1, 2), (2, 10)] {
        let id = ids[task_index];
        board.move_task(id, TaskStatus::ToDo, target).unwrap();
        let column = board.column(project.id, TaskStatus::ToDo);
        let expected = target.min(column.len() - 1);
        assert_eq!(column[expected].id, id);
        assert_dense(&board, &project);
    }
}

#[test]
fn move_to_current_position_is_noop() {
    let (mut board, project) = board_with_project();
    add(&mut board, &project, "a", TaskStatus::ToDo);
    let b = add(&mut board, &project, "b", TaskStatus::ToDo);
    add(&mut board, &project, "c", TaskStatus::Done);
    let before = board.tasks_by_project(project.id);

    let moved = board.move_task(b.id, TaskStatus::ToDo, 1).unwrap();

    assert!(moved.is_noop());
    assert_eq!(board.tasks_by_project(project.id), before);
}

#[test]
fn move_to_empty_column_yields_single_element() {
    let (mut board, project) = board_with_project();
    let task = add(&mut board, &project, "a", TaskStatus::ToDo);

    board.move_task(task.id, TaskStatus::Done, 5).unwrap();

    let done = board.column(project.id, TaskStatus::Done);
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].order, 0);
    assert!(board.column(project.id, TaskStatus::ToDo).is_empty());
}

#[test]
fn move_unknown_task_is_noop() {
    let (mut board, project) = board_with_project();
    add(&mut board, &project, "a", TaskStatus::ToDo);
    let before = board.tasks_by_project(project.id);

    assert!(board.move_task(Uuid::new_v4(), TaskStatus::Done, 0).is_none());
    assert_eq!(board.tasks_by_project(project.id), before);
}

#[test]
fn move_leaves_other_projects_untouched() {
    let (mut board, project) = board_with_project();
    let other = board.add_project("other").unwrap();
    add(&mut board, &other, "x", TaskStatus::Done);
    add(&mut board, &other, "y", TaskStatus::Done);
    let before = board.tasks_by_project(other.id);
    let task = add(&mut board, &project, "a", TaskStatus::ToDo);

    board.move_task(task.id, TaskStatus::Done, 0).unwrap();

    assert_eq!(board.tasks_by_project(other.id), before);
}

#[test]
fn delete_task_repacks_former_column() {
    let (mut board, project) = board_with_project();
    add(&mut board, &project, "a", TaskStatus::ToDo);
    let middle = add(&mut board, &project, "b", TaskStatus::ToDo);
    add(&mut board, &project, "c", TaskStatus::ToDo);

    assert!(board.delete_task(middle.id));
    assert!(!board.delete_task(middle.id));

    assert_eq!(column_titles(&board, &project, TaskStatus::ToDo), vec!["a", "c"]);
    assert_dense(&board, &project);

    let appended = add(&mut board, &project, "d", TaskStatus::ToDo);
    assert_eq!(appended.order, 2);
}

#[test]
fn update_details_never_touches_position() {
    let (mut board, project) = board_with_project();
    add(&mut board, &project, "a", TaskStatus::InProgress);
    let task = add(&mut board, &project, "b", TaskStatus::InProgress);

    let updated = board
        .update_task_details(
            task.id,
            TaskDetailsPatch {
                title: Some(" renamed ".to_string()),
                description: Some(Some("details".to_string())),
                ..TaskDetailsPatch::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.description.as_deref(), Some("details"));
    assert_eq!(updated.status, TaskStatus::InProgress);
    assert_eq!(updated.order, 1);
}

#[test]
fn update_details_validates_title_and_ignores_unknown_ids() {
    let (mut board, project) = board_with_project();
    let task = add(&mut board, &project, "a", TaskStatus::ToDo);

    let blank = TaskDetailsPatch {
        title: Some("   ".to_string()),
        ..TaskDetailsPatch::default()
    };
    assert_eq!(
        board.update_task_details(task.id, blank).unwrap_err(),
        BoardServiceError::EmptyTitle
    );
    assert_eq!(board.task(task.id).unwrap().title, "a");

    let rename = TaskDetailsPatch {
        title: Some("b".to_string()),
        ..TaskDetailsPatch::default()
    };
    assert_eq!(board.update_task_details(Uuid::new_v4(), rename).unwrap(), None);
}

#[test]
fn overdue_tasks_skip_done_and_future_dates() {
    let (mut board, project) = board_with_project();
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let yesterday = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
    let late = board
        .add_task(NewTask::new(project.id, "late", TaskStatus::ToDo).with_due_date(yesterday))
        .unwrap();
    board
        .add_task(NewTask::new(project.id, "finished", TaskStatus::Done).with_due_date(yesterday))
        .unwrap();
    board
        .add_task(NewTask::new(project.id, "today", TaskStatus::InProgress).with_due_date(today))
        .unwrap();

    let overdue = board.overdue_tasks(project.id, today);

    assert_eq!(overdue, vec![late]);
}

#[test]
fn dashboard_counts_every_project() {
    let (mut board, project) = board_with_project();
    board.add_project("idle").unwrap();
    add(&mut board, &project, "a", TaskStatus::ToDo);
    add(&mut board, &project, "b", TaskStatus::Done);

    let summary = board.dashboard();

    assert_eq!(summary.overall.total(), 2);
    assert_eq!(summary.projects.len(), 2);
    assert_eq!(summary.projects[0].counts.done, 1);
    assert_eq!(summary.projects[1].counts.total(), 0);
}
