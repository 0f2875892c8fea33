pub fn scenario_tutorial() -> &'static str {
	"# Title\n## Step One\nDo A\n```blocks\nlet x=1\n```\n## Step Two\nDo B @unplugged"
}

pub fn flagged_tutorial() -> &'static str {
	"# Flags

## Intro @fullscreen

Welcome.

## Outside @unplugged

Go play.

## Done @tutorialCompleted

Well done!

## Plain

Nothing special.
"
}

pub fn legacy_tutorial() -> &'static str {
	"# Legacy

### First @fullscreen

Old style step.

### Second

Another old style step.
"
}

pub fn hint_tutorial() -> &'static str {
	"# Hints

## Make a sprite

Create a sprite and move it around.
Use the arrow keys.

```blocks
let mySprite = sprites.create(img`.`)
```

Try running the game.

```package
arcade-character-animations
```

## Show a picture

Look at this picture.

![Sprite](/static/sprite.png)

## Hidden only

Set things up.

```template
let score = 0
```
"
}

pub fn mixed_editor_tutorial() -> &'static str {
	"# Mixed

## Blocks first

```blocks
let a = 1
```

## Python second

```spy
b = 2
```

## Sim last

```sim
let c = 3
```
"
}

pub fn not_found_document() -> &'static str {
	"# Not found\n\nThe tutorial you requested does not exist.\n\n## Try again\n\nCheck the \
	 address."
}

pub fn highlighted_code() -> &'static str {
	"let x = 1\n// @highlight\nlet y = 2\nlet z = 3"
}
